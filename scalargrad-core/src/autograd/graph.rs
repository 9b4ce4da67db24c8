use crate::error::ScalarGradError;
use crate::node::{Node, NodeId};
use std::collections::{HashMap, VecDeque};

/// The subgraph reachable from a terminal node, in backward execution order.
///
/// The order is dependency-closed: a node appears only after every node that consumes
/// it as an operand. This holds even when a shared node is reached through paths of
/// different lengths (diamonds), where a plain DFS discovery order would run a node's
/// rule before all of its consumers have contributed to its gradient.
///
/// The graph holds clones of every reachable node, keeping them alive (and their
/// [`NodeId`]s valid) for as long as it exists.
#[derive(Debug)]
pub struct ComputationGraph {
    terminal: Node,
    order: Vec<Node>,
}

impl ComputationGraph {
    /// Discovers every node reachable from `terminal` and orders them for the backward pass.
    ///
    /// 1. Walks the operand edges with an explicit stack, counting for each node how many
    ///    consumer edges point at it. Edges are counted with multiplicity, so `x + x`
    ///    gives `x` two pending consumers.
    /// 2. Runs Kahn's algorithm from the terminal (which has no consumers inside its own
    ///    subgraph): a node is emitted once all of its consumer edges have been released.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::CycleDetected`] if some discovered node is never released.
    /// Graphs built through the public API are acyclic, so this indicates corruption.
    pub fn build(terminal: &Node) -> Result<ComputationGraph, ScalarGradError> {
        // --- 1. Discovery and consumer-edge counting ---
        let mut pending: HashMap<NodeId, usize> = HashMap::new();
        let mut discovered: HashMap<NodeId, Node> = HashMap::new();
        let mut stack = vec![terminal.clone()];
        discovered.insert(terminal.id(), terminal.clone());
        pending.insert(terminal.id(), 0);

        while let Some(node) = stack.pop() {
            for operand in node.read_data().operands.iter() {
                *pending.entry(operand.id()).or_insert(0) += 1;
                if !discovered.contains_key(&operand.id()) {
                    discovered.insert(operand.id(), operand.clone());
                    stack.push(operand.clone());
                }
            }
        }

        // --- 2. Kahn's algorithm over consumer edges ---
        if pending.get(&terminal.id()).copied().unwrap_or(0) != 0 {
            return Err(ScalarGradError::CycleDetected);
        }
        let mut order = Vec::with_capacity(discovered.len());
        let mut ready = VecDeque::from([terminal.clone()]);

        while let Some(node) = ready.pop_front() {
            for operand in node.read_data().operands.iter() {
                let count = pending.get_mut(&operand.id()).ok_or_else(|| {
                    ScalarGradError::InternalError(format!(
                        "operand {:?} missing from discovery pass",
                        operand.id()
                    ))
                })?;
                *count -= 1;
                if *count == 0 {
                    ready.push_back(operand.clone());
                }
            }
            order.push(node);
        }

        if order.len() != discovered.len() {
            log::warn!(
                "Backward order covers {} of {} reachable nodes",
                order.len(),
                discovered.len()
            );
            return Err(ScalarGradError::CycleDetected);
        }

        Ok(ComputationGraph {
            terminal: terminal.clone(),
            order,
        })
    }

    /// Runs the backward pass over the graph.
    ///
    /// Seeds the terminal's gradient to 1.0, then applies each node's local rule exactly
    /// once, in [`order`](Self::order), adding the contributions into operand gradients.
    /// Gradients of other nodes are accumulated, not reset; see [`zero_grad`](Self::zero_grad).
    ///
    /// # Errors
    /// Propagates [`ScalarGradError::OperandCountMismatch`] from a local rule. Gradients
    /// written before the failing node are left in place.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        log::debug!(
            "Backward pass over {} nodes from {}",
            self.order.len(),
            self.terminal
        );
        self.terminal.set_grad(1.0);

        for node in &self.order {
            // Collect everything first: an operand may alias another operand (x + x),
            // so no borrow of `node` may be held while gradients are written.
            let (op, grad_output, operands) = {
                let guard = node.read_data();
                if guard.operands.is_empty() {
                    continue;
                }
                (guard.op, guard.grad, guard.operands.clone())
            };
            let operand_values: Vec<f64> = operands.iter().map(Node::value).collect();
            let contributions = op.backward(grad_output, &operand_values)?;
            log::trace!(
                "{} (grad={}) -> contributions {:?}",
                op,
                grad_output,
                contributions
            );

            for (operand, contribution) in operands.iter().zip(contributions) {
                if !contribution.is_finite() {
                    log::warn!(
                        "Non-finite gradient contribution {} from '{}' into {}",
                        contribution,
                        op,
                        operand
                    );
                }
                operand.accumulate_grad(contribution);
            }
        }
        Ok(())
    }

    /// Resets the gradient of every node in the graph, terminal included, to 0.
    pub fn zero_grad(&self) {
        for node in &self.order {
            node.set_grad(0.0);
        }
    }

    /// Nodes in backward execution order; the terminal comes first.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Reachable leaves (inputs and coerced constants), in backward execution order.
    pub fn leaves(&self) -> Vec<Node> {
        self.order.iter().filter(|n| n.is_leaf()).cloned().collect()
    }

    pub fn terminal(&self) -> &Node {
        &self.terminal
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
