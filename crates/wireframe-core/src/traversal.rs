//! Depth-first tree conversion with progress reporting.
//!
//! A conversion first counts every node under its roots, then visits each
//! node exactly once in pre-order. Parents are restyled before their
//! children so contrast decisions see the already-converted parent. Walks use
//! an explicit stack, so tree depth is not bounded by the call stack.

use crate::convert::{FontLoader, convert_node};
use crate::error::WireframeError;
use crate::host::Host;
use crate::message::CoreMessage;
use crate::node::NodeId;
use crate::style::WireframeStyle;

/// Visited/total node counters for one conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionProgress {
    pub current: usize,
    pub total: usize,
}

impl ConversionProgress {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.total
    }

    pub fn message(&self) -> CoreMessage {
        CoreMessage::Progress {
            value: self.current,
            total: self.total,
        }
    }
}

/// How often progress is reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressThrottle {
    /// Report every visited node.
    EveryNode,
    /// Report every `n`th node, and always the final one.
    Every(usize),
}

impl ProgressThrottle {
    fn should_emit(&self, progress: &ConversionProgress) -> bool {
        match *self {
            ProgressThrottle::EveryNode => true,
            ProgressThrottle::Every(n) => {
                n <= 1 || progress.current % n == 0 || progress.current == progress.total
            }
        }
    }
}

/// Counts visited nodes and decides which visits are reported.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    progress: ConversionProgress,
    throttle: ProgressThrottle,
}

impl ProgressTracker {
    pub fn new(total: usize, throttle: ProgressThrottle) -> Self {
        Self {
            progress: ConversionProgress::new(total),
            throttle,
        }
    }

    /// Record one visit. Returns the progress to report, if any.
    ///
    /// `current` never passes `total`.
    pub fn advance(&mut self) -> Option<ConversionProgress> {
        if self.progress.current >= self.progress.total {
            log::warn!(
                "Visited more nodes than counted ({} total)",
                self.progress.total
            );
            return None;
        }
        self.progress.current += 1;
        self.throttle
            .should_emit(&self.progress)
            .then_some(self.progress)
    }

    pub fn progress(&self) -> ConversionProgress {
        self.progress
    }
}

/// Count the roots and all their transitive children.
pub fn count_nodes<H: Host + ?Sized>(host: &H, roots: &[NodeId]) -> usize {
    let mut stack: Vec<NodeId> = roots.to_vec();
    let mut count = 0;
    while let Some(id) = stack.pop() {
        let Some(node) = host.node(id) else {
            continue;
        };
        count += 1;
        stack.extend_from_slice(node.children());
    }
    count
}

/// Result of visiting one node.
#[derive(Debug)]
pub enum VisitOutcome {
    /// The node was restyled.
    Converted,
    /// The node type is not restyled.
    Skipped,
    /// Conversion failed; the node keeps whatever was already applied.
    Failed(WireframeError),
}

/// A node whose conversion failed.
#[derive(Debug)]
pub struct NodeFailure {
    pub id: NodeId,
    pub name: String,
    pub error: WireframeError,
}

/// Summary of a finished traversal.
#[derive(Debug, Default)]
pub struct TraversalReport {
    pub converted: usize,
    pub skipped: usize,
    pub failures: Vec<NodeFailure>,
}

/// Walks subtrees and restyles every node with one [`WireframeStyle`].
pub struct Traversal<'a, H: Host + ?Sized> {
    host: &'a mut H,
    style: &'a WireframeStyle,
    tracker: ProgressTracker,
    fonts: FontLoader,
    report: TraversalReport,
}

impl<'a, H: Host + ?Sized> Traversal<'a, H> {
    /// Prepare a traversal that will visit `total` nodes.
    pub fn new(
        host: &'a mut H,
        style: &'a WireframeStyle,
        total: usize,
        throttle: ProgressThrottle,
    ) -> Self {
        Self {
            host,
            style,
            tracker: ProgressTracker::new(total, throttle),
            fonts: FontLoader::new(),
            report: TraversalReport::default(),
        }
    }

    /// Use a font loader that already holds fonts loaded by the caller.
    pub fn with_fonts(mut self, fonts: FontLoader) -> Self {
        self.fonts = fonts;
        self
    }

    /// Convert the subtree rooted at `root`, parents before children and
    /// siblings in order. Failures are recorded and never stop the walk.
    pub fn run(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            self.visit(id);
            if let Some(node) = self.host.node(id) {
                stack.extend(node.children().iter().rev().copied());
            }
        }
    }

    fn visit(&mut self, id: NodeId) {
        let outcome = match convert_node(&mut *self.host, id, self.style, &mut self.fonts) {
            Ok(true) => VisitOutcome::Converted,
            Ok(false) => VisitOutcome::Skipped,
            Err(error) => VisitOutcome::Failed(error),
        };

        if let Some(progress) = self.tracker.advance() {
            self.host.post_message(&progress.message());
        }

        match outcome {
            VisitOutcome::Converted => self.report.converted += 1,
            VisitOutcome::Skipped => self.report.skipped += 1,
            VisitOutcome::Failed(error) => {
                let name = self
                    .host
                    .node(id)
                    .map(|node| node.name.clone())
                    .unwrap_or_default();
                log::error!("Error converting node {}: {}", name, error);
                self.report.failures.push(NodeFailure { id, name, error });
            }
        }
    }

    pub fn progress(&self) -> ConversionProgress {
        self.tracker.progress()
    }

    /// Finish the traversal and return its report.
    pub fn finish(self) -> TraversalReport {
        self.report
    }
}

/// Convert whole subtrees, reporting progress on every node.
pub fn convert_tree<H: Host + ?Sized>(
    host: &mut H,
    roots: &[NodeId],
    style: &WireframeStyle,
) -> (ConversionProgress, TraversalReport) {
    let total = count_nodes(host, roots);
    let mut traversal = Traversal::new(host, style, total, ProgressThrottle::EveryNode);
    for &root in roots {
        traversal.run(root);
    }
    let progress = traversal.progress();
    (progress, traversal.finish())
}
