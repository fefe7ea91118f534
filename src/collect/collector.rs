//! The long-lived collector: configuration plus session state.

use tracing::debug;

use super::cursor::Collect;
use super::session::Session;
use crate::config::{validate, Config, RawConfig, ValidationReport};
use crate::error::Result;
use crate::host::{FunctionCatalog, Invoke, TypeOracle};
use crate::Ident;

/// Discovers identifiers that satisfy a capability list, following the
/// discovery functions registered in its configuration.
///
/// ```ignore
/// let mut collector = Collector::new(&universe, &raw);
/// let found: Vec<Ident> = collector.collect_all(["Dog"])?;
/// ```
///
/// With auto-reset on (the default) every [`Collector::collect`] starts from
/// an empty session. With it off, visited / yielded state accumulates across
/// calls, so later calls only report what earlier ones did not.
#[derive(Debug)]
pub struct Collector<H> {
    host: H,
    config: Config,
    report: ValidationReport,
    session: Session,
}

impl<H> Collector<H>
where
    H: TypeOracle + FunctionCatalog,
{
    /// Validate `raw` against `host` and build a collector on the result.
    pub fn new(host: H, raw: &RawConfig) -> Self {
        let (config, report) = validate(&host, raw);
        debug!(
            capabilities = config.capabilities().len(),
            discovery = config.discovery().len(),
            rejected = report.rejections().len(),
            "collector configured"
        );
        Collector {
            host,
            config,
            report,
            session: Session::default(),
        }
    }
}

impl<H> Collector<H> {
    /// Build a collector on an already validated configuration.
    pub fn with_config(host: H, config: Config) -> Self {
        Collector {
            host,
            config,
            report: ValidationReport::default(),
            session: Session::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What validation dropped at construction.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auto_reset(&self) -> bool {
        self.config.auto_reset
    }

    pub fn set_auto_reset(&mut self, auto_reset: bool) {
        self.config.auto_reset = auto_reset;
    }

    /// Forget everything visited and yielded so far.
    pub fn reset(&mut self) {
        self.session.clear();
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H> Collector<H>
where
    H: TypeOracle + Invoke,
{
    /// Start a lazy walk from `seeds`.
    ///
    /// In auto-reset mode the session is cleared here, before the first pull.
    pub fn collect<I>(&mut self, seeds: I) -> Collect<'_, H>
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        if self.config.auto_reset {
            self.session.clear();
        }
        let seeds = seeds.into_iter().map(Into::into).collect();
        Collect::new(&self.host, &self.config, &mut self.session, seeds)
    }

    /// Drain a walk from `seeds`, stopping at the first failure.
    pub fn collect_all<I>(&mut self, seeds: I) -> Result<Vec<Ident>>
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        self.collect(seeds).collect()
    }
}
