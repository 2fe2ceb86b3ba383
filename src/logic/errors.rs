use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
    }

    // Non-2xx replies are reported as "API error (<status>): <body>"
    if error_msg.contains("api error (404") {
        return ErrorType::NotFound;
    }
    if error_msg.contains("api error (5") {
        return ErrorType::ServerError;
    }

    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show the raw root cause
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    error.root_cause().to_string()
}

/// Root-cause message plus a short hint for the common transport failures
pub fn describe_error(error: &Error) -> String {
    let detail = format_error_message(error);
    match classify_error(error) {
        ErrorType::ConnectionRefused | ErrorType::NetworkError => {
            format!("{} (is the backend running?)", detail)
        }
        ErrorType::Timeout => format!("{} (backend did not answer in time)", detail),
        ErrorType::NotFound => format!("{} (no longer exists)", detail),
        ErrorType::ServerError | ErrorType::Other => detail,
    }
}

/// "Failed to <action>: <detail>" for failure states and toasts
pub fn failure_message(action: &str, detail: &str) -> String {
    format!("Failed to {}: {}", action, detail)
}
