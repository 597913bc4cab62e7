use current_platform::CURRENT_PLATFORM;

/// Long version string shown by `--version`
pub fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let license = env!("CARGO_PKG_LICENSE");

    format!("{version} {cpu}\nOutput: RGB565 big-endian C array\nLicense: {license}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_crate_version() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains("RGB565"));
    }
}
