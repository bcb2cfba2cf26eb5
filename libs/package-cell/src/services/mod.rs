pub mod package;

pub use package::PackageService;
