//! Conversion session controller.
//!
//! The controller owns the host for the lifetime of a plugin session and
//! handles one UI message at a time. A convert request clones the selected
//! roots, restyles every clone and hands the clones back to the host as the
//! new selection.

use crate::convert::FontLoader;
use crate::error::{WireframeError, WireframeResult};
use crate::host::Host;
use crate::message::{CoreMessage, UiMessage, resolve_options};
use crate::node::NodeId;
use crate::style::{ConversionOptions, WireframeStyle};
use crate::traversal::{
    ConversionProgress, NodeFailure, ProgressThrottle, Traversal, TraversalReport, count_nodes,
};
use kurbo::Point;

pub const HELP_TITLE: &str = "🎨 Wireframe Converter Help";
pub const HELP_LEARN_MORE: &str = "Click 'Learn More' for documentation";
pub const EMPTY_SELECTION_NOTICE: &str = "Please select at least one node to convert.";
pub const NON_CLONEABLE_NOTICE: &str = "Selected node cannot be cloned";
pub const COMPLETE_NOTICE: &str = "Wireframe conversion complete! ✅";

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Horizontal gap between an original and its wireframe clone.
    pub clone_offset: f64,
    /// Progress is reported every this many nodes, and on the last one.
    pub progress_interval: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clone_offset: 100.0,
            progress_interval: 10,
        }
    }
}

/// Result of one convert request.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Clones produced, in selection order.
    pub clones: Vec<NodeId>,
    pub progress: ConversionProgress,
    pub traversal: TraversalReport,
    /// Selected roots the host refused to duplicate.
    pub rejected_roots: Vec<NodeFailure>,
}

impl ConversionReport {
    /// True when at least one node failed or a root could not be cloned.
    pub fn has_failures(&self) -> bool {
        !self.traversal.failures.is_empty() || !self.rejected_roots.is_empty()
    }
}

/// What handling a UI message did.
#[derive(Debug)]
pub enum SessionOutcome {
    Converted(ConversionReport),
    HelpShown,
    Closed,
}

/// Serializes UI requests against one host.
pub struct SessionController<H: Host> {
    host: H,
    config: SessionConfig,
}

impl<H: Host> SessionController<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, SessionConfig::default())
    }

    pub fn with_config(host: H, config: SessionConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parse and handle a raw UI message.
    pub fn handle_json(&mut self, json: &str) -> WireframeResult<SessionOutcome> {
        let message = UiMessage::from_json(json)?;
        Ok(self.handle_message(message))
    }

    pub fn handle_message(&mut self, message: UiMessage) -> SessionOutcome {
        match message {
            UiMessage::Convert {
                font_choice,
                theme_choice,
                use_rounded_corners,
            } => {
                let options = resolve_options(
                    font_choice.as_deref(),
                    theme_choice.as_deref(),
                    use_rounded_corners,
                );
                SessionOutcome::Converted(self.convert(&options))
            }
            UiMessage::Help => {
                self.show_help();
                SessionOutcome::HelpShown
            }
            UiMessage::Close => {
                log::info!("Closing session");
                self.host.close();
                SessionOutcome::Closed
            }
        }
    }

    fn show_help(&mut self) {
        self.host.notify(HELP_TITLE);
        self.host.notify(HELP_LEARN_MORE);
    }

    /// Convert the current selection.
    ///
    /// Never fails as a whole: an empty selection or a root the host cannot
    /// duplicate is reported to the user, and node failures are collected in
    /// the report. `complete` is posted exactly once.
    pub fn convert(&mut self, options: &ConversionOptions) -> ConversionReport {
        let selection = self.host.selection();
        if selection.is_empty() {
            log::warn!("{}", WireframeError::EmptySelection);
            self.host.notify(EMPTY_SELECTION_NOTICE);
            let progress = ConversionProgress::new(0);
            self.host.post_message(&progress.message());
            self.host.post_message(&CoreMessage::Complete);
            return ConversionReport::default();
        }

        let style = WireframeStyle::new(options);
        log::info!(
            "Converting {} root(s) with theme {}, font {}, corners {}",
            selection.len(),
            style.kind(),
            style.font,
            if style.apply_radius { "rounded" } else { "sharp" }
        );

        let colors = style.colors();
        log::debug!(
            "Palette: content {}, fill {}, inverted {}, background {}",
            colors.content.to_hex(),
            colors.fill.to_hex(),
            colors.fill_inverted.to_hex(),
            colors.background.to_hex()
        );

        let mut fonts = FontLoader::new();
        if let Err(err) = fonts.ensure_loaded(&mut self.host, &style.font) {
            log::warn!("Could not load {}: {}", style.font, err);
        }

        let mut report = ConversionReport::default();
        for &root in &selection {
            match self.clone_root(root) {
                Ok(clone) => report.clones.push(clone),
                Err(error) => {
                    let name = self
                        .host
                        .node(root)
                        .map(|node| node.name.clone())
                        .unwrap_or_default();
                    log::warn!("Skipping root {}: {}", name, error);
                    self.host.notify(NON_CLONEABLE_NOTICE);
                    report.rejected_roots.push(NodeFailure {
                        id: root,
                        name,
                        error,
                    });
                }
            }
        }

        let total = count_nodes(&self.host, &report.clones);
        self.host.post_message(&ConversionProgress::new(total).message());

        let mut traversal = Traversal::new(
            &mut self.host,
            &style,
            total,
            ProgressThrottle::Every(self.config.progress_interval),
        )
        .with_fonts(fonts);
        for &clone in &report.clones {
            traversal.run(clone);
        }
        report.progress = traversal.progress();
        report.traversal = traversal.finish();

        if !report.clones.is_empty() {
            self.host.set_selection(&report.clones);
            self.host.scroll_and_zoom_into_view(&report.clones);
        }
        self.host.notify(COMPLETE_NOTICE);
        self.host.post_message(&CoreMessage::Complete);

        log::info!(
            "Conversion finished: {}/{} nodes, {} converted, {} failed",
            report.progress.current,
            report.progress.total,
            report.traversal.converted,
            report.traversal.failures.len()
        );
        report
    }

    /// Duplicate a root and place the copy to its right.
    fn clone_root(&mut self, root: NodeId) -> WireframeResult<NodeId> {
        let clone = self.host.clone_subtree(root)?;
        let original = self.host.get(root)?;
        let position = Point::new(
            original.position.x + original.size.width + self.config.clone_offset,
            original.position.y,
        );
        self.host.get_mut(clone)?.position = position;
        Ok(clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SceneDocument;
    use crate::memory::MemoryHost;
    use crate::node::{SceneNode, TextAutoResize};
    use crate::paint::{Paint, PaintColor};
    use crate::theme::{FontSpec, ThemeKind};
    use crate::traversal::convert_tree;

    fn options(theme: ThemeKind) -> ConversionOptions {
        ConversionOptions {
            theme,
            ..ConversionOptions::default()
        }
    }

    fn session_for(doc: SceneDocument, roots: Vec<NodeId>) -> SessionController<MemoryHost> {
        SessionController::new(MemoryHost::new(doc).with_selection(roots))
    }

    fn clone_fill(session: &SessionController<MemoryHost>, report: &ConversionReport) -> Option<PaintColor> {
        let node = session.host().node(report.clones[0]).unwrap();
        node.paints().unwrap().first().and_then(Paint::color)
    }

    fn dark_rectangle() -> (SceneDocument, NodeId) {
        let mut doc = SceneDocument::new();
        let id = doc.add_root(
            SceneNode::rectangle("Dark")
                .at(10.0, 20.0)
                .sized(100.0, 50.0)
                .with_fills(vec![Paint::solid(PaintColor::rgb(0.1, 0.1, 0.1))]),
        );
        (doc, id)
    }

    #[test]
    fn test_dark_rectangle_in_mono() {
        let (doc, id) = dark_rectangle();
        let mut session = session_for(doc, vec![id]);
        let report = session.convert(&options(ThemeKind::Mono));
        assert_eq!(clone_fill(&session, &report), Some(ThemeKind::Mono.theme().palette.fill_inverted));
    }

    #[test]
    fn test_dark_rectangle_in_blueprint() {
        let (doc, id) = dark_rectangle();
        let mut session = session_for(doc, vec![id]);
        let report = session.convert(&options(ThemeKind::Blueprint));
        assert_eq!(
            clone_fill(&session, &report),
            Some(ThemeKind::Blueprint.theme().palette.fill_inverted)
        );
    }

    #[test]
    fn test_text_on_dark_parent() {
        let mut doc = SceneDocument::new();
        let parent = doc.add_root(
            SceneNode::frame("Hero")
                .sized(200.0, 100.0)
                .with_fills(vec![Paint::solid(PaintColor::rgb(0.05, 0.05, 0.05))]),
        );
        doc.add_child(parent, SceneNode::text("Headline", "Hello")).unwrap();
        let mut session = session_for(doc, vec![parent]);

        let report = session.convert(&ConversionOptions::default());

        let clone = session.host().node(report.clones[0]).unwrap();
        let text = session.host().node(clone.children()[0]).unwrap();
        assert_eq!(
            text.paints().unwrap()[0].color(),
            Some(ThemeKind::Mono.theme().palette.content_light)
        );
    }

    #[test]
    fn test_icon_button_background_is_transparent() {
        let mut doc = SceneDocument::new();
        let id = doc.add_root(
            SceneNode::frame("IconButton/Settings")
                .with_fills(vec![Paint::solid(PaintColor::rgb(0.2, 0.4, 0.9))]),
        );
        let mut session = session_for(doc, vec![id]);
        let report = session.convert(&ConversionOptions::default());
        let clone = session.host().node(report.clones[0]).unwrap();
        assert!(clone.paints().unwrap().is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let (doc, _) = dark_rectangle();
        let mut session = session_for(doc, vec![]);

        let report = session.convert(&ConversionOptions::default());

        assert!(report.clones.is_empty());
        assert_eq!(report.progress, ConversionProgress { current: 0, total: 0 });
        let host = session.host();
        assert_eq!(host.document().nodes.len(), 1);
        assert_eq!(host.notifications(), &[EMPTY_SELECTION_NOTICE.to_string()]);
        assert_eq!(
            host.messages(),
            &[CoreMessage::Progress { value: 0, total: 0 }, CoreMessage::Complete]
        );
    }

    #[test]
    fn test_clone_is_placed_beside_original() {
        let (doc, id) = dark_rectangle();
        let mut session = session_for(doc, vec![id]);
        let report = session.convert(&ConversionOptions::default());

        let host = session.host();
        let original = host.node(id).unwrap();
        let clone = host.node(report.clones[0]).unwrap();
        assert_eq!(clone.position, Point::new(210.0, 20.0));
        assert_eq!(clone.size, original.size);
        assert_eq!(
            original.paints().unwrap()[0].color(),
            Some(PaintColor::rgb(0.1, 0.1, 0.1))
        );
        assert_eq!(host.selection(), report.clones);
        assert_eq!(host.viewport(), report.clones.as_slice());
        assert_eq!(host.notifications(), &[COMPLETE_NOTICE.to_string()]);
        assert_eq!(host.messages().last(), Some(&CoreMessage::Complete));
    }

    #[test]
    fn test_geometry_is_preserved() {
        let mut doc = SceneDocument::new();
        let root = doc.add_root(SceneNode::frame("Screen").sized(400.0, 300.0));
        let fixed = doc
            .add_child(root, SceneNode::rectangle("Box").at(5.0, 6.0).sized(70.0, 80.0))
            .unwrap();
        let mut label = SceneNode::text("Label", "A rather long label").at(12.0, 14.0).sized(60.0, 20.0);
        label.as_text_mut().unwrap().auto_resize = TextAutoResize::Height;
        let label = doc.add_child(root, label).unwrap();
        let mut session = session_for(doc, vec![root]);

        let report = session.convert(&ConversionOptions::default());
        assert!(!report.has_failures());

        let host = session.host();
        let clone = host.node(report.clones[0]).unwrap();
        let boxed = host.node(clone.children()[0]).unwrap();
        let text = host.node(clone.children()[1]).unwrap();
        let original_box = host.node(fixed).unwrap();
        let original_text = host.node(label).unwrap();

        assert_eq!(boxed.position, original_box.position);
        assert_eq!(boxed.size, original_box.size);
        assert_eq!(text.position, original_text.position);
        assert_eq!(text.size.width, original_text.size.width);
        assert_eq!(text.as_text().unwrap().auto_resize, TextAutoResize::Height);
    }

    #[test]
    fn test_second_pass_is_a_no_op_in_mono() {
        let mut doc = SceneDocument::new();
        let root = doc.add_root(
            SceneNode::frame("Screen").with_fills(vec![Paint::solid(PaintColor::white())]),
        );
        let card = doc
            .add_child(
                root,
                SceneNode::frame("Card")
                    .with_fills(vec![Paint::solid(PaintColor::rgb(0.1, 0.1, 0.1))]),
            )
            .unwrap();
        doc.add_child(card, SceneNode::text("Title", "Hi")).unwrap();
        doc.add_child(
            root,
            SceneNode::ellipse("Avatar").with_fills(vec![Paint::solid(PaintColor::rgb(0.8, 0.6, 0.4))]),
        )
        .unwrap();
        let mut session = session_for(doc, vec![root]);
        let report = session.convert(&ConversionOptions::default());
        let clone = report.clones[0];

        let first = session.host().document().clone();
        let style = WireframeStyle::default();
        let (_, second_report) = convert_tree(session.host_mut(), &[clone], &style);
        assert!(second_report.failures.is_empty());

        for (id, before) in &first.nodes {
            let after = session.host().node(*id).unwrap();
            assert_eq!(before.paints(), after.paints());
            assert_eq!(before.strokes(), after.strokes());
            assert_eq!(before.corners(), after.corners());
        }
    }

    fn second_pass_background(theme: ThemeKind) -> (Option<PaintColor>, Option<PaintColor>) {
        let mut doc = SceneDocument::new();
        let root = doc.add_root(
            SceneNode::frame("Screen").with_fills(vec![Paint::solid(PaintColor::white())]),
        );
        let mut session = session_for(doc, vec![root]);
        let report = session.convert(&options(theme));
        let first = clone_fill(&session, &report);

        let style = WireframeStyle::new(&options(theme));
        convert_tree(session.host_mut(), &report.clones, &style);
        (first, clone_fill(&session, &report))
    }

    #[test]
    fn test_second_pass_inverts_dark_mode_background() {
        let palette = ThemeKind::DarkMode.theme().palette;
        let (first, second) = second_pass_background(ThemeKind::DarkMode);
        assert_eq!(first, Some(palette.background));
        assert_eq!(second, Some(palette.fill_inverted));
    }

    #[test]
    fn test_second_pass_inverts_blueprint_background() {
        let palette = ThemeKind::Blueprint.theme().palette;
        let (first, second) = second_pass_background(ThemeKind::Blueprint);
        assert_eq!(first, Some(palette.background));
        assert_eq!(second, Some(palette.fill_inverted));
    }

    #[test]
    fn test_second_pass_inverts_dark_mode_fill() {
        let palette = ThemeKind::DarkMode.theme().palette;
        let mut doc = SceneDocument::new();
        let root = doc.add_root(
            SceneNode::rectangle("Chip")
                .with_fills(vec![Paint::solid(PaintColor::rgb(0.9, 0.7, 0.3))]),
        );
        let mut session = session_for(doc, vec![root]);
        let report = session.convert(&options(ThemeKind::DarkMode));
        assert_eq!(clone_fill(&session, &report), Some(palette.fill));

        let style = WireframeStyle::new(&options(ThemeKind::DarkMode));
        convert_tree(session.host_mut(), &report.clones, &style);
        assert_eq!(clone_fill(&session, &report), Some(palette.fill_inverted));
    }

    #[test]
    fn test_progress_reaches_total_despite_failures() {
        let mut doc = SceneDocument::new();
        let root = doc.add_root(SceneNode::frame("List"));
        for i in 0..12 {
            doc.add_child(root, SceneNode::text(format!("Row {}", i), "text"))
                .unwrap();
        }
        let host = MemoryHost::new(doc)
            .with_selection(vec![root])
            .with_available_fonts([FontSpec::new("Helvetica", "Regular")]);
        let mut session = SessionController::new(host);

        let report = session.convert(&ConversionOptions::default());

        assert_eq!(report.progress, ConversionProgress { current: 13, total: 13 });
        assert_eq!(report.traversal.failures.len(), 12);
        assert_eq!(
            session.host().messages(),
            &[
                CoreMessage::Progress { value: 0, total: 13 },
                CoreMessage::Progress { value: 10, total: 13 },
                CoreMessage::Progress { value: 13, total: 13 },
                CoreMessage::Complete,
            ]
        );
    }

    #[test]
    fn test_non_cloneable_root_is_skipped() {
        let mut doc = SceneDocument::new();
        let locked = doc.add_root(SceneNode::frame("Locked"));
        let open = doc.add_root(SceneNode::rectangle("Open").sized(10.0, 10.0));
        let mut host = MemoryHost::new(doc).with_selection(vec![locked, open]);
        host.lock(locked);
        let mut session = SessionController::new(host);

        let report = session.convert(&ConversionOptions::default());

        assert_eq!(report.clones.len(), 1);
        assert_eq!(report.rejected_roots.len(), 1);
        assert_eq!(report.rejected_roots[0].name, "Locked");
        assert_eq!(report.progress.total, 1);
        assert_eq!(
            session.host().notifications(),
            &[NON_CLONEABLE_NOTICE.to_string(), COMPLETE_NOTICE.to_string()]
        );
    }

    #[test]
    fn test_all_roots_non_cloneable_still_completes() {
        let mut doc = SceneDocument::new();
        let locked = doc.add_root(SceneNode::frame("Locked"));
        let mut host = MemoryHost::new(doc).with_selection(vec![locked]);
        host.lock(locked);
        let mut session = SessionController::new(host);

        let report = session.convert(&ConversionOptions::default());

        assert!(report.clones.is_empty());
        assert_eq!(report.progress, ConversionProgress { current: 0, total: 0 });
        let host = session.host();
        assert_eq!(
            host.notifications(),
            &[NON_CLONEABLE_NOTICE.to_string(), COMPLETE_NOTICE.to_string()]
        );
        assert_eq!(
            host.messages(),
            &[CoreMessage::Progress { value: 0, total: 0 }, CoreMessage::Complete]
        );
        assert_eq!(host.selection(), vec![locked]);
    }

    #[test]
    fn test_font_loaded_once() {
        let mut doc = SceneDocument::new();
        let root = doc.add_root(SceneNode::frame("Form"));
        doc.add_child(root, SceneNode::text("Name", "Name")).unwrap();
        doc.add_child(root, SceneNode::text("Email", "Email")).unwrap();
        let mut session = session_for(doc, vec![root]);

        session.convert(&ConversionOptions::default());

        assert_eq!(session.host().font_loads().len(), 1);
    }

    #[test]
    fn test_help_and_close_messages() {
        let mut session = session_for(SceneDocument::new(), vec![]);

        let outcome = session.handle_json(r#"{"type":"help"}"#).unwrap();
        assert!(matches!(outcome, SessionOutcome::HelpShown));
        assert_eq!(
            session.host().notifications(),
            &[HELP_TITLE.to_string(), HELP_LEARN_MORE.to_string()]
        );

        let outcome = session.handle_json(r#"{"type":"close"}"#).unwrap();
        assert!(matches!(outcome, SessionOutcome::Closed));
        assert!(session.host().is_closed());
    }

    #[test]
    fn test_legacy_convert_message() {
        let (doc, id) = dark_rectangle();
        let mut session = session_for(doc, vec![id]);
        let outcome = session
            .handle_json(r#"{"type":"convert-to-wireframe","themeChoice":"dark-mode"}"#)
            .unwrap();
        let SessionOutcome::Converted(report) = outcome else {
            panic!("expected a conversion");
        };
        assert_eq!(
            clone_fill(&session, &report),
            Some(ThemeKind::DarkMode.theme().palette.fill_inverted)
        );
    }

    #[test]
    fn test_malformed_message_is_an_error() {
        let mut session = session_for(SceneDocument::new(), vec![]);
        assert!(session.handle_json("{").is_err());
    }
}
