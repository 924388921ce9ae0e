use tokio::fs;

pub const VENMO_APP_NAME: &str = "venmo";

#[cfg(windows)]
const SEPARATOR: &str = ";";

#[cfg(not(windows))]
const SEPARATOR: &str = ":";

/// Checks if a wallet app is present on the machine by scanning `PATH`.
pub async fn is_installed(program: &str) -> bool {
    #[cfg(windows)]
    let program = &format!("{program}.exe");

    let Ok(path) = std::env::var("PATH") else {
        return false;
    };

    for path in path.split(SEPARATOR) {
        let to_try = format!("{path}/{program}");

        log::debug!("Checking if {to_try} exists");

        if fs::metadata(to_try).await.is_ok() {
            return true;
        }
    }

    false
}

pub async fn is_venmo_installed() -> bool {
    is_installed(VENMO_APP_NAME).await
}
