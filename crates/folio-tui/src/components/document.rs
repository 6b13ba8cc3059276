//! The scrollable portfolio document.
//!
//! Lays the four sections out one after another at a given width and records
//! where each one starts. Every section is at least one viewport tall, so
//! each anchor can reach the top of the screen.

use folio_core::core::profile::Profile;
use folio_core::core::registry::SectionRegistry;
use folio_core::core::section::SectionId;
use folio_core::utils::text::{display_width, wrap_text};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::styles;
use super::viewport::Viewport;

/// Rendered document lines plus section anchors.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<(SectionId, u32)>,
}

impl Document {
    /// Lay out the document.
    ///
    /// `form_lines` is spliced into the contact section. `min_section_rows`
    /// pads short sections.
    pub fn build(
        profile: &Profile,
        width: usize,
        min_section_rows: usize,
        form_lines: Vec<Line<'static>>,
    ) -> Self {
        let width = width.max(1);
        let mut doc = Document::default();

        for id in SectionId::ALL {
            let mut body = match id {
                SectionId::Home => home_lines(profile, width),
                SectionId::About => about_lines(profile, width),
                SectionId::Projects => project_lines(profile, width),
                SectionId::Contact => contact_lines(profile),
            };
            if id == SectionId::Contact {
                body.push(Line::from(""));
                body.extend(form_lines.iter().cloned());
                body.push(Line::from(""));
                body.push(Line::from(Span::styled(
                    profile.copyright_line(),
                    styles::TEXT_DIM,
                )));
            }
            doc.push_section(id, width, body, min_section_rows);
        }
        doc
    }

    fn push_section(
        &mut self,
        id: SectionId,
        width: usize,
        body: Vec<Line<'static>>,
        min_rows: usize,
    ) {
        let top = self.lines.len();
        self.anchors.push((id, top as u32));

        self.lines.push(Line::from(Span::styled(
            format!("{} {}", id.icon(), id.label()),
            styles::heading_style(),
        )));
        self.lines.push(Line::from(Span::styled(
            "─".repeat(width.min(40)),
            styles::TEXT_DIM,
        )));
        self.lines.extend(body);
        self.lines.push(Line::from(""));

        while self.lines.len() - top < min_rows {
            self.lines.push(Line::from(""));
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn anchors(&self) -> &[(SectionId, u32)] {
        &self.anchors
    }

    /// Registry measured from this layout.
    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::from_measurements(self.anchors.iter().copied())
    }

    /// Draw the visible part of the document inside a bordered block.
    pub fn render(&self, frame: &mut Frame, area: Rect, viewport: &Viewport, title: &str) {
        let range = viewport.visible_range(self.lines.len());
        let visible: Vec<Line> = self.lines[range].to_vec();

        let paragraph = Paragraph::new(visible).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        );
        frame.render_widget(paragraph, area);
    }
}

fn text_lines(text: &str, width: usize) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text, width).into_iter().map(Line::from)
}

fn home_lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    if let Some(initial) = profile.initial() {
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", initial),
            styles::text_bold_white(),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Hi, I'm {}", profile.name),
        styles::text_bold_white(),
    )));
    lines.push(Line::from(Span::styled(
        profile.role.clone(),
        styles::heading_style(),
    )));
    lines.push(Line::from(""));
    lines.extend(text_lines(&profile.tagline, width));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 4 to get in touch, 3 to see my work",
        styles::TEXT_DIM,
    )));
    lines
}

fn about_lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for paragraph in &profile.about {
        lines.extend(text_lines(paragraph, width));
        lines.push(Line::from(""));
    }
    if !profile.skills.is_empty() {
        lines.push(Line::from(Span::styled("Skills", styles::label_style())));
        lines.extend(text_lines(&profile.skills.join(" · "), width));
    }
    if let Some(resume) = &profile.resume {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Resume ", styles::label_style()),
            Span::styled(resume.clone(), styles::TEXT_LINK),
        ]));
    }
    lines
}

fn project_lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    if profile.projects.is_empty() {
        return vec![Line::from(Span::styled("No projects yet.", styles::TEXT_DIM))];
    }

    let mut lines = Vec::new();
    for project in &profile.projects {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            styles::text_bold_white(),
        )));
        lines.extend(text_lines(&project.description, width));
        if !project.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                project.tech.join(" · "),
                styles::TEXT_WARNING,
            )));
        }
        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(
                format!("↗ {}", link),
                styles::TEXT_LINK,
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn contact_lines(profile: &Profile) -> Vec<Line<'static>> {
    let contact = &profile.contact;
    let mut entries: Vec<(&str, String)> = Vec::new();
    if let Some(location) = &contact.location {
        entries.push(("Location", location.clone()));
    }
    entries.push(("Email", contact.email.clone()));
    if let Some(phone) = &contact.phone {
        entries.push(("Call", phone.clone()));
    }
    if let Some(whatsapp) = &contact.whatsapp {
        entries.push(("WhatsApp", whatsapp.clone()));
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| display_width(label))
        .chain(profile.socials.iter().map(|s| display_width(s.kind.label())))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line<'static>> = entries
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", label, width = label_width),
                    styles::label_style(),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    for social in &profile.socials {
        let marker = if social.opens_externally() { " ↗" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}  ", social.kind.label(), width = label_width),
                styles::label_style(),
            ),
            Span::styled(format!("{}{}", social.href, marker), styles::TEXT_LINK),
        ]));
    }

    lines
}
