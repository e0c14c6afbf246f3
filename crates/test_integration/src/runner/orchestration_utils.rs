//! Runs the suite against one shared [`TestContext`], group by group.
//!
//! The context is reset before every test, and a failing test does not stop
//! the rest of the suite. The run fails at the end if any test did.

use crate::runner::context::test_context::TestContext;
use color_eyre::eyre::{Report, eyre};
use color_eyre::Result;
use colored::*;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,api=debug,common_services=debug,client=debug,hyper=error,reqwest=error";

/// Runs groups of tests as `{ "Group" => [test_fn, ...], ... }` and evaluates to
/// the suite's `Result`.
#[macro_export]
macro_rules! execute_suite {
    ($context:expr, { $( $group:literal => [ $($test_fn:ident),* $(,)? ] ),* $(,)? }) => {{
        let context = $context;
        let mut report = $crate::runner::orchestration_utils::SuiteReport::new();
        $(
            report.begin_group($group);
            $(
                report.record(
                    $crate::runner::orchestration_utils::run_isolated(
                        context,
                        stringify!($test_fn),
                        $test_fn(context),
                    )
                    .await,
                );
            )*
        )*
        report.finish()
    }};
}

pub struct TestOutcome {
    name: &'static str,
    elapsed: Duration,
    error: Option<Report>,
}

struct GroupReport {
    name: &'static str,
    outcomes: Vec<TestOutcome>,
}

impl GroupReport {
    fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_none()).count()
    }

    fn elapsed(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }
}

pub struct SuiteReport {
    started: Instant,
    groups: Vec<GroupReport>,
}

impl SuiteReport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            groups: Vec::new(),
        }
    }

    pub fn begin_group(&mut self, name: &'static str) {
        println!();
        println!("{}", format!(" {} ", name.to_uppercase()).on_blue().black().bold());
        self.groups.push(GroupReport {
            name,
            outcomes: Vec::new(),
        });
    }

    pub fn record(&mut self, outcome: TestOutcome) {
        if let Some(group) = self.groups.last_mut() {
            group.outcomes.push(outcome);
        }
    }

    /// Prints a line per group and fails when any test failed.
    pub fn finish(self) -> Result<()> {
        println!("{}", "─".repeat(60).truecolor(80, 80, 80));
        for group in &self.groups {
            let line = format!(
                "{:<16} {}/{} passed ({:.2?})",
                group.name,
                group.passed(),
                group.outcomes.len(),
                group.elapsed()
            );
            if group.passed() == group.outcomes.len() {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }

        let failed: Vec<&str> = self
            .groups
            .iter()
            .flat_map(|g| &g.outcomes)
            .filter(|o| o.error.is_some())
            .map(|o| o.name)
            .collect();
        let total: usize = self.groups.iter().map(|g| g.outcomes.len()).sum();
        println!(
            "{} {}/{} tests passed in {:.2?}.",
            " SUMMARY ".on_purple().black().bold(),
            total - failed.len(),
            total,
            self.started.elapsed()
        );
        println!("{}", "─".repeat(60).truecolor(80, 80, 80));

        if failed.is_empty() {
            Ok(())
        } else {
            Err(eyre!("failed tests: {}", failed.join(", ")))
        }
    }
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Resets the shared fakes, then runs one test and prints its result.
pub async fn run_isolated<Fut>(context: &TestContext, name: &'static str, test: Fut) -> TestOutcome
where
    Fut: Future<Output = Result<()>>,
{
    context.reset().await;

    let start_time = Instant::now();
    let error = test.await.err();
    let elapsed = start_time.elapsed();

    match &error {
        None => println!("  {} {} ({:.2?})", "✓".green(), name, elapsed),
        Some(e) => {
            println!("  {} {} ({:.2?})", "✗".red(), name.red(), elapsed);
            println!("\n{e:?}");
        }
    }

    TestOutcome {
        name,
        elapsed,
        error,
    }
}

pub fn setup_tracing_and_panic_handling() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .compact()
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("cannot install tracing subscriber: {e}"))
}
