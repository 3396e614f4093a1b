use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ndarray::Array1;
use serde::Serialize;

use crate::agent::ValueIterationAgent;
use crate::error::Result;
use crate::mdp::MarkovDecisionProcess;

/// One row of a planning result: a state, its value and its greedy action
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateSummary<S, A> {
    pub state: S,
    pub value: f64,
    pub action: Option<A>,
}

/// Value and greedy action of every state, in model order
pub fn summarize<M: MarkovDecisionProcess>(
    agent: &ValueIterationAgent<M>,
) -> Vec<StateSummary<M::State, M::Action>> {
    agent
        .greedy_policy()
        .into_iter()
        .map(|(state, action)| StateSummary {
            value: agent.value(&state),
            state,
            action,
        })
        .collect()
}

/// Write [`summarize`] as pretty-printed JSON
pub fn export_summary_json<M>(agent: &ValueIterationAgent<M>, path: &Path) -> Result<()>
where
    M: MarkovDecisionProcess,
    M::State: Serialize,
    M::Action: Serialize,
{
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &summarize(agent))?;
    Ok(())
}

/// Values as a dense vector indexed by the model's state order
pub fn values_to_array<M: MarkovDecisionProcess>(agent: &ValueIterationAgent<M>) -> Array1<f64> {
    agent
        .mdp()
        .states()
        .iter()
        .map(|s| agent.value(s))
        .collect()
}
