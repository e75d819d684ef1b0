use price_forecast::ForecastError;
use price_math::MathError;
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::IoError(_)));

    let parse_error = "invalid".parse::<f64>().unwrap_err();
    let forecast_error = ForecastError::from(parse_error);
    assert!(matches!(forecast_error, ForecastError::ParseError(_)));

    let math_error = MathError::InvalidInput("zero base".to_string());
    let forecast_error = ForecastError::from(math_error);
    assert!(matches!(forecast_error, ForecastError::MathError(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::DataError("Row 3 has invalid cost -4".to_string());
    assert_eq!(error.to_string(), "Data error: Row 3 has invalid cost -4");

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}
