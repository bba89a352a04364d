/// Control loop: sample → resolve → emit → report, once per tick
///
/// All mutable state (active policy, resolver history, tick timing)
/// lives here and is handed to the resolver and emitter by reference.
use super::console::Console;
use super::input::{KeyBindings, KeySampler, Sampler};
use super::output::{Emitter, KeyInjector, DEFAULT_HOLD};
use super::tick_loop::{TickTimer, TICK_INTERVAL};
use crate::error::Result;
use crate::socd::{resolve, CleaningPolicy, DirectionState, ResolverHistory};
use log::{debug, info, trace};
use std::io::Write;
use std::time::Duration;

/// Log the measured tick rate this often (~10s at full rate)
const RATE_LOG_INTERVAL: u64 = 600;

/// Runtime configuration. Built in code; nothing is persisted.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub bindings: KeyBindings,
    pub initial_policy: CleaningPolicy,
    /// Tap hold duration
    pub hold: Duration,
    /// Sleep after each tick
    pub tick_interval: Duration,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            initial_policy: CleaningPolicy::default(),
            hold: DEFAULT_HOLD,
            tick_interval: TICK_INTERVAL,
        }
    }
}

/// What one tick saw and did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub raw: DirectionState,
    pub cleaned: DirectionState,
    /// Policy in effect after switch keys were applied
    pub policy: CleaningPolicy,
    /// Set when a switch key was held this tick
    pub switched: Option<CleaningPolicy>,
}

/// The SOCD cleaner
pub struct Cleaner<S: KeySampler, I: KeyInjector, W: Write> {
    sampler: Sampler,
    keys: S,
    injector: I,
    emitter: Emitter,
    console: Console<W>,
    timer: TickTimer,

    /// Active cleaning policy
    policy: CleaningPolicy,

    /// Last-input signal and alternation toggle
    history: ResolverHistory,
}

impl<S: KeySampler, I: KeyInjector, W: Write> Cleaner<S, I, W> {
    /// Create a cleaner over the given platform services
    pub fn new(config: CleanerConfig, keys: S, injector: I, console: Console<W>) -> Result<Self> {
        config.bindings.validate()?;

        Ok(Self {
            sampler: Sampler::new(config.bindings),
            keys,
            injector,
            emitter: Emitter::new(config.hold),
            console,
            timer: TickTimer::new(config.tick_interval),
            policy: config.initial_policy,
            history: ResolverHistory::new(),
        })
    }

    /// Select a policy. Resolver history is kept across switches.
    pub fn set_policy(&mut self, policy: CleaningPolicy) {
        if policy != self.policy {
            debug!("Policy {} -> {}", self.policy, policy);
        }
        self.policy = policy;
    }

    /// Run one iteration: switches, sample, resolve, emit, report
    pub fn tick(&mut self) -> TickReport {
        self.keys.refresh();

        // Every held switch applies in check order, so the last one wins
        let mut switched = None;
        for policy in self.sampler.held_switches(&self.keys) {
            self.set_policy(policy);
            self.console.print_switch(policy);
            switched = Some(policy);
        }

        let raw = self.sampler.sample_directions(&self.keys);
        self.history.observe(&raw);

        let cleaned = resolve(raw, self.policy, &mut self.history);
        self.emitter.emit(cleaned, &mut self.injector);
        self.console.print_status(&raw, &cleaned, self.policy);

        TickReport {
            raw,
            cleaned,
            policy: self.policy,
            switched,
        }
    }

    /// Print the banner and tick forever at the fixed rate
    pub fn run(&mut self) -> ! {
        self.console.print_banner(self.sampler.bindings());
        info!(
            "Cleaning with {} policy, {:?} taps, target {:.1} ticks/s",
            self.policy,
            self.emitter.hold(),
            self.timer.target_rate()
        );

        loop {
            let tick = self.timer.begin_tick();
            let report = self.tick();
            trace!(
                "Tick {}: {:?} -> {:?} under {}{}",
                tick,
                report.raw,
                report.cleaned,
                report.policy,
                if report.switched.is_some() { " (switched)" } else { "" }
            );
            if tick % RATE_LOG_INTERVAL == 0 {
                debug!(
                    "Tick {}: {:.1} ticks/s after {:.1}s",
                    tick,
                    self.timer.rate(),
                    self.timer.elapsed().as_secs_f32()
                );
            }
            self.timer.rest();
        }
    }

    #[cfg(test)]
    fn policy(&self) -> CleaningPolicy {
        self.policy
    }

    #[cfg(test)]
    fn history(&self) -> &ResolverHistory {
        &self.history
    }

    #[cfg(test)]
    fn keys_mut(&mut self) -> &mut S {
        &mut self.keys
    }

    #[cfg(test)]
    fn injector(&self) -> &I {
        &self.injector
    }

    #[cfg(test)]
    fn console(&self) -> &Console<W> {
        &self.console
    }
}
