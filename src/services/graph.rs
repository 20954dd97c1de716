//! Dependency graph construction and cycle detection.
//!
//! Builds an id-indexed view of a task batch: concrete ids (positional
//! where absent), the "depends on" adjacency restricted to ids present
//! in the batch, and the fan-in count used by the dependency-blocking
//! metric.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::domain::models::{ResolvedTask, TaskInput};

/// Id-indexed dependency view of one task batch.
///
/// Tasks keep their input order. Dependency ids that do not resolve to
/// a task in the batch are dropped from the adjacency (they still never
/// error). If two records map to the same id, both stay in the task
/// list while the id set keeps a single entry; callers must guarantee
/// id uniqueness to avoid ambiguous edges.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<ResolvedTask>,
    adjacency: HashMap<i64, Vec<i64>>,
    dependents: HashMap<i64, u32>,
}

impl TaskGraph {
    /// Build the graph from a flat batch.
    ///
    /// Ids are resolved first across the whole batch (missing ids become
    /// the 1-based input position), then edges are added for every
    /// dependency id that resolved to a batch member.
    pub fn build(batch: &[TaskInput]) -> Self {
        let tasks: Vec<ResolvedTask> = batch
            .iter()
            .enumerate()
            .map(|(position, task)| ResolvedTask::from_input(task, position))
            .collect();

        let known_ids: HashSet<i64> = tasks.iter().map(|t| t.id).collect();

        let mut adjacency: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut dependents: HashMap<i64, u32> = HashMap::new();
        for task in &tasks {
            for &dep in &task.dependencies {
                *dependents.entry(dep).or_insert(0) += 1;
                if known_ids.contains(&dep) {
                    adjacency.entry(task.id).or_default().push(dep);
                } else {
                    debug!(task_id = task.id, dependency = dep, "dropping unknown dependency");
                }
            }
        }

        Self {
            tasks,
            adjacency,
            dependents,
        }
    }

    /// Tasks with concrete ids, in input order.
    pub fn tasks(&self) -> &[ResolvedTask] {
        &self.tasks
    }

    /// Number of dependency mentions of `id` across the batch (fan-in).
    pub fn dependents_count(&self, id: i64) -> u32 {
        self.dependents.get(&id).copied().unwrap_or(0)
    }

    /// Whether the in-batch dependency edges form a directed cycle.
    ///
    /// Kahn-style reduction: the node set is every id that appears as an
    /// edge endpoint (isolated tasks cannot participate in a cycle and
    /// are excluded). A cycle exists iff the reduction visits fewer
    /// nodes than the set contains.
    pub fn has_cycle(&self) -> bool {
        let mut nodes: HashSet<i64> = HashSet::new();
        for (&source, targets) in &self.adjacency {
            nodes.insert(source);
            nodes.extend(targets.iter().copied());
        }

        let mut in_degree: HashMap<i64, usize> = nodes.iter().map(|&n| (n, 0)).collect();
        for targets in self.adjacency.values() {
            for target in targets {
                if let Some(degree) = in_degree.get_mut(target) {
                    *degree += 1;
                }
            }
        }

        let mut queue: VecDeque<i64> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut visited = 0usize;
        while let Some(node) = queue.pop_front() {
            visited += 1;
            if let Some(targets) = self.adjacency.get(&node) {
                for target in targets {
                    if let Some(degree) = in_degree.get_mut(target) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(*target);
                        }
                    }
                }
            }
        }

        visited != nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, deps: Vec<i64>) -> TaskInput {
        TaskInput::new(format!("Task {id}"))
            .with_id(id)
            .with_dependencies(deps)
    }

    #[test]
    fn test_build_assigns_positional_ids() {
        let batch = vec![TaskInput::new("first"), TaskInput::new("second")];
        let graph = TaskGraph::build(&batch);
        assert_eq!(graph.tasks()[0].id, 1);
        assert_eq!(graph.tasks()[1].id, 2);
    }

    #[test]
    fn test_build_keeps_explicit_ids() {
        let batch = vec![task(10, vec![]), TaskInput::new("positional")];
        let graph = TaskGraph::build(&batch);
        assert_eq!(graph.tasks()[0].id, 10);
        assert_eq!(graph.tasks()[1].id, 2);
    }

    #[test]
    fn test_unknown_dependencies_are_dropped_from_edges() {
        let batch = vec![task(1, vec![99]), task(2, vec![1])];
        let graph = TaskGraph::build(&batch);
        assert!(!graph.has_cycle());
        assert!(graph.adjacency.get(&1).is_none());
        assert_eq!(graph.adjacency[&2], vec![1]);
    }

    #[test]
    fn test_dependents_count_counts_every_mention() {
        let batch = vec![
            task(1, vec![]),
            task(2, vec![1]),
            task(3, vec![1, 99]),
        ];
        let graph = TaskGraph::build(&batch);
        assert_eq!(graph.dependents_count(1), 2);
        assert_eq!(graph.dependents_count(2), 0);
        // Mentions of out-of-batch ids are counted but never read back
        // by any in-batch task.
        assert_eq!(graph.dependents_count(99), 1);
    }

    #[test]
    fn test_no_cycle_in_chain() {
        let batch = vec![task(1, vec![]), task(2, vec![1]), task(3, vec![2])];
        assert!(!TaskGraph::build(&batch).has_cycle());
    }

    #[test]
    fn test_detects_two_node_cycle() {
        let batch = vec![task(1, vec![2]), task(2, vec![1])];
        assert!(TaskGraph::build(&batch).has_cycle());
    }

    #[test]
    fn test_detects_self_loop() {
        let batch = vec![task(1, vec![1])];
        assert!(TaskGraph::build(&batch).has_cycle());
    }

    #[test]
    fn test_detects_longer_cycle_behind_chain() {
        let batch = vec![
            task(1, vec![]),
            task(2, vec![1, 4]),
            task(3, vec![2]),
            task(4, vec![3]),
        ];
        assert!(TaskGraph::build(&batch).has_cycle());
    }

    #[test]
    fn test_isolated_tasks_never_cycle() {
        let batch = vec![task(1, vec![]), task(2, vec![]), task(3, vec![])];
        assert!(!TaskGraph::build(&batch).has_cycle());
    }

    #[test]
    fn test_empty_batch() {
        let graph = TaskGraph::build(&[]);
        assert!(graph.tasks().is_empty());
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_duplicate_ids_keep_both_records() {
        // First record takes synthetic id 1, second claims 1 explicitly.
        let batch = vec![TaskInput::new("synthetic"), task(1, vec![])];
        let graph = TaskGraph::build(&batch);
        assert_eq!(graph.tasks().len(), 2);
        assert_eq!(graph.tasks()[0].id, 1);
        assert_eq!(graph.tasks()[1].id, 1);
    }
}
