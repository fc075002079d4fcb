pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(serde_json::to_value(&h).unwrap(), serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn message_body_shape() {
        let body = types::MessageBody::new("Failed to fetch notes");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"message": "Failed to fetch notes"})
        );
    }
}
