/// Macro to generate the `From<sqlx::Error>` implementation for service errors
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(UserServiceError, InternalServerError);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $internal_variant:ident) => {
    impl From<sqlx::Error> for $error_type {
      fn from(err: sqlx::Error) -> Self {
        <$error_type>::$internal_variant(format!("Database error: {}", err))
      }
    }
  };
}
