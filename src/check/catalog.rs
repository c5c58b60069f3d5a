//! 固定的检查列表（顺序即报告顺序）

/// One named remote diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub command: &'static str,
}

// 每条命令都以 `|| true` 结尾：检查不适用时远程 shell 仍然返回 0，
// 非零退出只留给连接层面的失败。
pub const CHECKS: [Check; 7] = [
    Check { name: "uptime",        command: "uptime -p || true" },
    Check { name: "disk_root",     command: "df -h / | tail -n1 || true" },
    Check { name: "nginx_active",  command: "systemctl is-active nginx || true" },
    Check { name: "os_release",    command: "cat /etc/os-release | grep PRETTY_NAME | cut -d= -f2- || true" },
    Check { name: "kernel",        command: "uname -r || true" },
    Check { name: "nginx_version", command: "nginx -v 2>&1 || true" },
    Check { name: "http_status",   command: "curl -s -o /dev/null -w '%{http_code}\\n' http://localhost || true" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_fallbacks() {
        let names: Vec<&str> = CHECKS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["uptime", "disk_root", "nginx_active", "os_release", "kernel", "nginx_version", "http_status"]);
        assert!(CHECKS.iter().all(|c| c.command.ends_with("|| true")));
    }

    #[test]
    fn http_status_keeps_literal_newline_escape() {
        assert!(CHECKS[6].command.contains(r"'%{http_code}\n'"));
    }
}
