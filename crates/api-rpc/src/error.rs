//! Maps application errors to JSON-RPC error codes.

use engager_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC error codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Serialization(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Io(e) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, e.to_string(), None::<()>),
        AppError::Internal(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_4001() {
        let err = to_rpc_error(AppError::NotFound("Job posting-1 not found".into()));
        assert_eq!(err.code(), code::NOT_FOUND);
        assert!(err.message().contains("posting-1"));
    }

    #[test]
    fn validation_and_domain_map_to_4000() {
        let err = to_rpc_error(AppError::Validation("bad input".into()));
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }
}
