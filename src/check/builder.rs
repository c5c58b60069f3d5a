//! 依次（或在有界线程池中）执行检查并组装报告

use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use crate::check::catalog::{Check, CHECKS};
use crate::check::remote::RemoteExecutor;
use crate::check::report::{CheckResult, Report};
use crate::utils::types::Target;
use crate::utils::Result;

pub struct ReportBuilder<'a, E: RemoteExecutor> {
    executor: &'a E,
    checks: &'a [Check],
    jobs: usize,
}

impl<'a, E: RemoteExecutor> ReportBuilder<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        ReportBuilder { executor, checks: &CHECKS, jobs: 1 }
    }

    /// Worker count; values below 1 are treated as 1.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    #[cfg(test)]
    fn checks(mut self, checks: &'a [Check]) -> Self {
        self.checks = checks;
        self
    }

    /// Runs every check; the first failure in check order aborts the build.
    pub fn build(&self, target: &Target) -> Result<Report> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

        let outputs = if self.jobs == 1 {
            self.run_sequential(target)
        } else {
            self.run_pooled(target)
        };

        let mut results = Vec::with_capacity(self.checks.len());
        for (check, output) in self.checks.iter().zip(outputs) {
            let output = output?;
            results.push(CheckResult { name: check.name.to_string(), output });
        }

        Ok(Report::new(timestamp, target.clone(), results))
    }

    fn run_one(&self, target: &Target, check: &Check) -> Result<String> {
        eprintln!("Running check {}...", check.name);
        let out = self.executor.run(target, check.command);
        if let Err(ref e) = out {
            if e.is_connection_failure() {
                tracing::warn!(check = check.name, error = %e, "target unreachable");
            } else {
                tracing::error!(check = check.name, error = %e, "check failed");
            }
        }
        out
    }

    fn run_sequential(&self, target: &Target) -> Vec<Result<String>> {
        let mut outputs = Vec::with_capacity(self.checks.len());
        for check in self.checks {
            let out = self.run_one(target, check);
            let failed = out.is_err();
            outputs.push(out);
            if failed {
                break;
            }
        }
        outputs
    }

    fn run_pooled(&self, target: &Target) -> Vec<Result<String>> {
        let next = AtomicUsize::new(0);
        let failed = AtomicBool::new(false);
        let slots: Mutex<Vec<Option<Result<String>>>> =
            Mutex::new(self.checks.iter().map(|_| None).collect());
        let workers = self.jobs.min(self.checks.len());

        std::thread::scope(|s| {
            for _ in 0..workers {
                s.spawn(|| loop {
                    // 已有失败时不再领取新的检查
                    if failed.load(Ordering::SeqCst) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::SeqCst);
                    let Some(check) = self.checks.get(i) else { break };
                    let out = self.run_one(target, check);
                    if out.is_err() {
                        failed.store(true, Ordering::SeqCst);
                    }
                    if let Ok(mut slots) = slots.lock() {
                        slots[i] = Some(out);
                    }
                });
            }
        });

        slots
            .into_inner()
            .unwrap_or_default()
            .into_iter()
            .map_while(|slot| slot)
            .collect()
    }
}
