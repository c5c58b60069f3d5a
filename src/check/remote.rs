//! 远程执行：每次检查一个独立的 ssh 进程

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use crate::utils::types::Target;
use crate::utils::{ProvcheckError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub trait RemoteExecutor: Sync {
    /// Runs `command` on the target and returns its trimmed stdout.
    fn run(&self, target: &Target, command: &str) -> Result<String>;
}

// ── ssh ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SshExecutor {
    pub program: String,
    pub connect_timeout: Option<Duration>,
    pub command_timeout: Option<Duration>,
}

impl SshExecutor {
    fn args(&self, target: &Target, command: &str) -> Vec<String> {
        let mut args = vec!["-o".to_string(), "StrictHostKeyChecking=no".to_string()];
        if let Some(t) = self.connect_timeout {
            args.push("-o".to_string());
            args.push(format!("ConnectTimeout={}", t.as_secs().max(1)));
        }
        args.push(target.to_string());
        args.push(command.to_string());
        args
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&self, target: &Target, command: &str) -> Result<String> {
        let connection = |message: String| ProvcheckError::Connection {
            target: target.to_string(),
            message,
        };

        tracing::debug!(%target, command, "ssh");
        let mut child = Command::new(&self.program)
            .args(self.args(target, command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| connection(format!("could not start {}: {}", self.program, e)))?;

        // 管道在后台读空，避免子进程写满缓冲区阻塞
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    abort(&mut child);
                    return Err(e.into());
                }
            }
            if let Some(limit) = self.command_timeout {
                if started.elapsed() >= limit {
                    abort(&mut child);
                    tracing::warn!(%target, command, "remote command timed out");
                    return Err(ProvcheckError::Timeout {
                        target: target.to_string(),
                        secs: limit.as_secs(),
                    });
                }
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if !status.success() {
            let err = stderr.trim();
            return Err(connection(if err.is_empty() {
                match status.code() {
                    Some(code) => format!("ssh command failed (exit status {})", code),
                    None => "ssh command failed".to_string(),
                }
            } else {
                err.to_string()
            }));
        }

        Ok(stdout.trim().to_string())
    }
}

/// Kills and reaps a child that will not be waited on normally.
fn abort(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut p) = pipe {
            let _ = p.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
