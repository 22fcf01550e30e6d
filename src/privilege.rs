/// Utility for checking and reporting privileged operation requirements

/// Check if the current process has sufficient privileges for raw network operations
#[cfg(unix)]
pub fn has_network_privileges() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(windows)]
pub fn has_network_privileges() -> bool {
    // On Windows, we can't easily check at runtime, so we assume true
    // and let the operation fail with proper error message
    true
}

/// Get a user-friendly error message for privilege-related failures
pub fn get_privilege_error_message() -> String {
    let binary = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    format!(
        "Insufficient privileges for network operations.\n\
        \n\
        ICMP reachability probes require raw socket access; without it\n\
        every probe reports the device as unreachable.\n\
        \n\
        Please run with elevated privileges:\n\
        - Using sudo: sudo {binary} [args]\n\
        - Or set capabilities: sudo setcap cap_net_raw+eip $(which {binary})"
    )
}
