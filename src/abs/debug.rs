//! OpenGL debug output.
//!
//! Messages from `glDebugMessageCallback` are filtered by severity and forwarded to the
//! `log` facade. Notifications and low-severity messages are dropped.

use glow::HasContext;

/// Whether a message of the given severity is worth reporting.
pub fn should_report(severity: u32) -> bool {
    !matches!(
        severity,
        glow::DEBUG_SEVERITY_NOTIFICATION | glow::DEBUG_SEVERITY_LOW
    )
}

/// Formats a debug message the way it appears in the log.
pub fn describe(source: u32, ty: u32, severity: u32, message: &str) -> String {
    let tag = if ty == glow::DEBUG_TYPE_ERROR {
        "** GL ERROR ** "
    } else {
        ""
    };
    format!(
        "{}source = {:#x}, type = {:#x}, severity = {:#x}, message = {}",
        tag, source, ty, severity, message
    )
}

fn on_message(source: u32, ty: u32, _id: u32, severity: u32, message: &str) {
    if !should_report(severity) {
        return;
    }
    let line = describe(source, ty, severity, message);
    if ty == glow::DEBUG_TYPE_ERROR {
        log::error!(target: "gl", "{}", line);
    } else {
        log::warn!(target: "gl", "{}", line);
    }
}

/// Enables debug output on the context and installs the logging callback.
pub fn install(gl: &mut glow::Context) {
    if !gl.supports_debug() {
        log::warn!("OpenGL debug output is not supported by this context");
        return;
    }
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.debug_message_callback(on_message);
        gl.debug_message_control(glow::DONT_CARE, glow::DONT_CARE, glow::DONT_CARE, &[], true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_severity_is_filtered() {
        assert!(!should_report(glow::DEBUG_SEVERITY_NOTIFICATION));
        assert!(!should_report(glow::DEBUG_SEVERITY_LOW));
        assert!(should_report(glow::DEBUG_SEVERITY_MEDIUM));
        assert!(should_report(glow::DEBUG_SEVERITY_HIGH));
    }

    #[test]
    fn test_errors_are_tagged() {
        let line = describe(
            glow::DEBUG_SOURCE_API,
            glow::DEBUG_TYPE_ERROR,
            glow::DEBUG_SEVERITY_HIGH,
            "bad enum",
        );
        assert!(line.starts_with("** GL ERROR **"));
        assert!(line.ends_with("message = bad enum"));

        let line = describe(
            glow::DEBUG_SOURCE_API,
            glow::DEBUG_TYPE_PERFORMANCE,
            glow::DEBUG_SEVERITY_MEDIUM,
            "slow path",
        );
        assert!(line.starts_with("source = "));
    }
}
