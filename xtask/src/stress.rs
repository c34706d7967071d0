//! Randomized churn runner
//!
//! This module provides the `stress` subcommand: a seeded sequence of
//! inserts, erases and merges on a `TreeMap`, checked against a `BTreeMap`
//! and validated periodically.

use anyhow::{Context, Result, bail, ensure};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbcontainers::map::TreeMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// Number of entries in each batch merged into the map under test.
const MERGE_BATCH: usize = 16;

/// Arguments for the stress subcommand
#[derive(Args, Debug)]
pub struct StressArgs {
    /// Scenario YAML file path
    #[arg(long, short = 's')]
    pub scenario: Option<PathBuf>,

    /// Override the number of operations
    #[arg(long)]
    pub operations: Option<u64>,

    /// Override the key space (keys are drawn from 0..key_space)
    #[arg(long)]
    pub key_space: Option<u32>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Scenario configuration from YAML
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioConfig {
    name: Option<String>,
    operations: Option<u64>,
    key_space: Option<u32>,
    seed: Option<u64>,
    insert_weight: Option<u32>,
    erase_weight: Option<u32>,
    merge_every: Option<u64>,
    validate_every: Option<u64>,
}

/// Resolved settings for one run
#[derive(Debug)]
struct StressPlan {
    name: String,
    operations: u64,
    key_space: u32,
    seed: u64,
    insert_weight: u32,
    erase_weight: u32,
    merge_every: u64,
    validate_every: u64,
}

impl StressPlan {
    /// Resolve settings from CLI overrides, environment and scenario
    fn from_args_and_scenario(args: &StressArgs, scenario: &ScenarioConfig) -> Result<Self> {
        // Priority: CLI > Environment > Scenario YAML > Default

        let operations = args
            .operations
            .or(env_override("STRESS_OPERATIONS")?)
            .or(scenario.operations)
            .unwrap_or(100_000);

        let key_space = args
            .key_space
            .or(env_override("STRESS_KEY_SPACE")?)
            .or(scenario.key_space)
            .unwrap_or(1024);

        let seed = args
            .seed
            .or(env_override("STRESS_SEED")?)
            .or(scenario.seed)
            .unwrap_or(0);

        let insert_weight = scenario.insert_weight.unwrap_or(1);
        let erase_weight = scenario.erase_weight.unwrap_or(1);

        if key_space == 0 {
            bail!("key_space must be at least 1");
        }
        if insert_weight.saturating_add(erase_weight) == 0 {
            bail!("insert_weight and erase_weight cannot both be 0");
        }

        Ok(Self {
            name: scenario
                .name
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            operations,
            key_space,
            seed,
            insert_weight,
            erase_weight,
            merge_every: scenario.merge_every.unwrap_or(0),
            validate_every: scenario.validate_every.unwrap_or(1000),
        })
    }
}

/// Summary written at the end of a run
#[derive(Debug, Default, Serialize)]
struct StressReport {
    scenario: String,
    seed: u64,
    operations: u64,
    inserted: u64,
    assigned: u64,
    erased: u64,
    missed: u64,
    merges: u64,
    merge_discarded: u64,
    validations: u64,
    final_length: usize,
    black_height: usize,
    elapsed_ms: u128,
}

/// Read an optional numeric override from the environment
fn env_override<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} is not a valid number: {raw:?}")),
        Err(_) => Ok(None),
    }
}

/// Load a scenario file
fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
}

/// Validate the map and compare it with the reference model
fn check(map: &TreeMap<u32, u64>, reference: &BTreeMap<u32, u64>, step: u64) -> Result<usize> {
    let black_height = map
        .validate()
        .with_context(|| format!("tree invariant broken after step {step}"))?;
    ensure!(
        map.len() == reference.len(),
        "length {} differs from reference length {} after step {step}",
        map.len(),
        reference.len()
    );
    ensure!(
        map.iter().eq(reference.iter()),
        "contents diverged from reference after step {step}"
    );
    Ok(black_height)
}

/// Execute the churn described by `plan`
fn execute(plan: &StressPlan) -> Result<StressReport> {
    let mut rng = StdRng::seed_from_u64(plan.seed);
    let mut map: TreeMap<u32, u64> = TreeMap::new();
    let mut reference: BTreeMap<u32, u64> = BTreeMap::new();
    let total_weight = plan.insert_weight + plan.erase_weight;
    let mut report = StressReport {
        scenario: plan.name.clone(),
        seed: plan.seed,
        operations: plan.operations,
        ..StressReport::default()
    };
    let started = Instant::now();

    for step in 1..=plan.operations {
        let key = rng.random_range(0..plan.key_space);

        if rng.random_range(0..total_weight) < plan.insert_weight {
            let (_, inserted) = map.insert_or_assign(key, step);
            reference.insert(key, step);
            if inserted {
                report.inserted += 1;
            } else {
                report.assigned += 1;
            }
        } else if map.remove(&key).is_some() {
            reference.remove(&key);
            report.erased += 1;
        } else {
            report.missed += 1;
        }

        if plan.merge_every > 0 && step % plan.merge_every == 0 {
            let mut batch: TreeMap<u32, u64> = (0..MERGE_BATCH)
                .map(|_| (rng.random_range(0..plan.key_space), step))
                .collect();
            for (&key, &value) in &batch {
                reference.entry(key).or_insert(value);
            }

            let before = map.len();
            let incoming = batch.len();
            map.merge(&mut batch);
            ensure!(batch.is_empty(), "merge left entries behind at step {step}");

            report.merges += 1;
            report.merge_discarded += (incoming - (map.len() - before)) as u64;
        }

        if plan.validate_every > 0 && step % plan.validate_every == 0 {
            let black_height = check(&map, &reference, step)?;
            report.validations += 1;
            tracing::debug!(step, length = map.len(), black_height, "validated");
        }
    }

    report.black_height = check(&map, &reference, plan.operations)?;
    report.validations += 1;
    report.final_length = map.len();
    report.elapsed_ms = started.elapsed().as_millis();
    Ok(report)
}

/// Run the stress subcommand
pub fn run(args: &StressArgs) -> Result<()> {
    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };
    let plan = StressPlan::from_args_and_scenario(args, &scenario)?;

    tracing::info!(
        scenario = %plan.name,
        operations = plan.operations,
        key_space = plan.key_space,
        seed = plan.seed,
        "starting stress run"
    );

    let report = execute(&plan)?;

    tracing::info!(
        inserted = report.inserted,
        erased = report.erased,
        merges = report.merges,
        final_length = report.final_length,
        black_height = report.black_height,
        elapsed_ms = report.elapsed_ms,
        "stress run passed"
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}
