//! Pipeline runner — threads a network through every ranking stage.
//!
//! Stages, in order: adjacency → dangling check → hyperlink → damping →
//! power iteration → sort. Each stage reads the previous stage's output and
//! produces a fresh value; nothing is mutated in place.

use crate::errors::{LinkRankError, Result};
use crate::matrix::adjacency::{dangling_columns, AdjacencyBuilder};
use crate::matrix::damping::DampingBlender;
use crate::matrix::hyperlink::HyperlinkMatrixBuilder;
use crate::network::Network;
use crate::pagerank::power::PowerIterationSolver;
use crate::pagerank::sort::RankSorter;
use crate::pipeline::artifacts::{RankedResult, RankingArtifacts};
use crate::search::KeywordSearchIndex;
use crate::types::{RankConfig, SearchHit};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a ranking stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("ranking_stage", stage = $name).entered();
    };
}

pub const STAGE_ADJACENCY: &str = "adjacency";
pub const STAGE_DANGLING: &str = "dangling_check";
pub const STAGE_HYPERLINK: &str = "hyperlink";
pub const STAGE_DAMPING: &str = "damping";
pub const STAGE_ITERATE: &str = "power_iteration";
pub const STAGE_SORT: &str = "sort";

/// A validated ranking configuration ready to run over networks
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPipeline {
    config: RankConfig,
    blender: DampingBlender,
    solver: PowerIterationSolver,
}

impl RankingPipeline {
    /// Validate `config` and build the stages it describes
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            blender: DampingBlender::new(config.damping)?,
            solver: PowerIterationSolver::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run every stage and keep all intermediates.
    pub fn run(&self, network: &Network) -> Result<RankingArtifacts> {
        let adjacency = {
            trace_stage!(STAGE_ADJACENCY);
            AdjacencyBuilder.build(network)
        };

        {
            trace_stage!(STAGE_DANGLING);
            let dangling = dangling_columns(&adjacency);
            if !dangling.is_empty() {
                if !self.config.dangling_policy.accepts_dangling() {
                    return Err(LinkRankError::dangling_graph(dangling));
                }
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    pages = dangling.len(),
                    "ranking a network with dangling pages; scores will not sum to 1"
                );
            }
        }

        let hyperlink = {
            trace_stage!(STAGE_HYPERLINK);
            HyperlinkMatrixBuilder.build(&adjacency)
        };

        let damped = {
            trace_stage!(STAGE_DAMPING);
            self.blender.blend(&hyperlink)
        };

        let solved = {
            trace_stage!(STAGE_ITERATE);
            self.solver.solve(&damped)?
        };

        let ranked = {
            trace_stage!(STAGE_SORT);
            RankSorter.sort(&solved.scores)
        };

        Ok(RankingArtifacts {
            adjacency,
            hyperlink,
            damped,
            result: RankedResult {
                ranked,
                iterations: solved.iterations,
                delta: solved.delta,
                converged: solved.converged,
            },
            rank_vector: solved.scores,
        })
    }

    /// Run every stage and keep only the ranking.
    pub fn rank(&self, network: &Network) -> Result<RankedResult> {
        self.run(network).map(|artifacts| artifacts.result)
    }
}

/// Rank `network` with the given damping, epsilon, and iteration cap.
///
/// Networks with dangling pages are rejected; use a [`RankingPipeline`] with
/// [`crate::DanglingPolicy::Accept`] to rank them anyway.
pub fn compute_ranking(
    network: &Network,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<RankedResult> {
    let config = RankConfig::default()
        .with_damping(damping)
        .with_epsilon(epsilon)
        .with_max_iterations(max_iterations);
    RankingPipeline::new(config)?.rank(network)
}

/// Keyword search over `pages`, in the order of `result`
pub fn search(result: &RankedResult, pages: &Network, query: &str) -> Vec<SearchHit> {
    KeywordSearchIndex::new(pages).search(result.pages(), query)
}
