#[cfg(test)]
mod tests {
    use crate::errors::ItemError;
    use crate::errors::internal::{CredentialError, InternalError, ItemStoreError, ValidationError};

    #[test]
    fn test_validation_error_converts_to_bad_request() {
        let internal_err: InternalError =
            ValidationError::new("name", "Name is required and must be a non-empty string").into();
        let item_err = ItemError::from_internal_error(internal_err, "Failed to save item", false);

        assert!(matches!(item_err, ItemError::ValidationFailed(_)));
        assert_eq!(item_err.message(), "Name is required and must be a non-empty string");
        assert!(!item_err.body().success);
    }

    #[test]
    fn test_not_found_converts_correctly() {
        let internal_err: InternalError = ItemStoreError::NotFound("missing".to_string()).into();
        let item_err = ItemError::from_internal_error(internal_err, "Failed to fetch item", true);

        assert!(matches!(item_err, ItemError::NotFound(_)));
        assert_eq!(item_err.message(), "Item not found");
        assert!(item_err.body().message.is_none());
    }

    #[test]
    fn test_storage_error_hides_detail_outside_development() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "secret path");
        let internal_err = InternalError::storage("write_items", io_err);
        let item_err = ItemError::from_internal_error(internal_err, "Failed to save item", false);

        assert!(matches!(item_err, ItemError::InternalError(_)));
        assert_eq!(item_err.message(), "Failed to save item");
        assert_eq!(item_err.body().message.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn test_storage_error_exposes_detail_in_development() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "secret path");
        let internal_err = InternalError::storage("write_items", io_err);
        let item_err = ItemError::from_internal_error(internal_err, "Failed to save item", true);

        let detail = item_err.body().message.clone().unwrap();
        assert!(detail.contains("write_items"));
        assert!(detail.contains("secret path"));
    }

    #[test]
    fn test_unexpected_domain_error_converts_to_internal_server_error() {
        // Credential errors shouldn't appear in item context
        let internal_err = InternalError::Credential(CredentialError::InvalidCredentials);
        let item_err = ItemError::from_internal_error(internal_err, "Failed to fetch items", false);

        assert!(matches!(item_err, ItemError::InternalError(_)));
        assert_eq!(item_err.message(), "Failed to fetch items");
    }
}
