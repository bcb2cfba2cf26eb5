// Structural payload validation shared by the entity cells. Each helper
// checks presence and shape of a single field and returns the extracted
// value or a field-level detail message. Business rules (referenced ids,
// duplicates) are not checked here.

use regex::Regex;
use serde_json::Value;

pub fn required_str(payload: &Value, field: &str) -> Result<String, String> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(format!("\"{}\" is not allowed to be empty", field)),
        Some(_) => Err(format!("\"{}\" must be a string", field)),
        None => Err(format!("\"{}\" is required", field)),
    }
}

pub fn required_number(payload: &Value, field: &str) -> Result<f64, String> {
    match payload.get(field) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("\"{}\" must be a number", field)),
        Some(_) => Err(format!("\"{}\" must be a number", field)),
        None => Err(format!("\"{}\" is required", field)),
    }
}

pub fn required_str_exact_len(payload: &Value, field: &str, len: usize) -> Result<String, String> {
    let value = required_str(payload, field)?;
    if value.chars().count() != len {
        return Err(format!("\"{}\" length must be {} characters long", field, len));
    }
    Ok(value)
}

pub fn required_str_min_len(payload: &Value, field: &str, min: usize) -> Result<String, String> {
    let value = required_str(payload, field)?;
    if value.chars().count() < min {
        return Err(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        ));
    }
    Ok(value)
}

pub fn required_email(payload: &Value, field: &str) -> Result<String, String> {
    let value = required_str(payload, field)?;
    if !is_valid_email(&value) {
        return Err(format!("\"{}\" must be a valid email", field));
    }
    Ok(value)
}

fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    email_regex.is_match(email) && email.len() <= 254
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_str_accepts_non_empty() {
        let payload = json!({"nome": "Maria"});
        assert_eq!(required_str(&payload, "nome").unwrap(), "Maria");
    }

    #[test]
    fn required_str_rejects_missing_field() {
        let payload = json!({});
        let err = required_str(&payload, "nome").unwrap_err();
        assert!(err.contains("required"));
    }

    #[test]
    fn required_str_rejects_empty_string() {
        let payload = json!({"nome": ""});
        let err = required_str(&payload, "nome").unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn required_str_rejects_wrong_type() {
        let payload = json!({"nome": 42});
        let err = required_str(&payload, "nome").unwrap_err();
        assert!(err.contains("must be a string"));
    }

    #[test]
    fn required_number_accepts_integers_and_floats() {
        let payload = json!({"qtde_sessao": 10, "valor_pacote": 149.9});
        assert_eq!(required_number(&payload, "qtde_sessao").unwrap(), 10.0);
        assert_eq!(required_number(&payload, "valor_pacote").unwrap(), 149.9);
    }

    #[test]
    fn required_number_rejects_numeric_string() {
        let payload = json!({"telefone": "11999990000"});
        assert!(required_number(&payload, "telefone").is_err());
    }

    #[test]
    fn exact_len_enforced() {
        let payload = json!({"cpf": "12345678901"});
        assert!(required_str_exact_len(&payload, "cpf", 11).is_ok());

        let payload = json!({"cpf": "1234567890"});
        assert!(required_str_exact_len(&payload, "cpf", 11).is_err());
    }

    #[test]
    fn min_len_enforced() {
        let payload = json!({"senha": "123456"});
        assert!(required_str_min_len(&payload, "senha", 6).is_ok());

        let payload = json!({"senha": "12345"});
        assert!(required_str_min_len(&payload, "senha", 6).is_err());
    }

    #[test]
    fn email_format_enforced() {
        let payload = json!({"email": "maria@example.com"});
        assert_eq!(
            required_email(&payload, "email").unwrap(),
            "maria@example.com"
        );

        let payload = json!({"email": "maria@invalid"});
        assert!(required_email(&payload, "email").is_err());
    }
}
