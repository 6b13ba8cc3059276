use crate::core::profile::Profile;
use crate::core::section::SectionId;
use crate::utils::text::wrap_text;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

/// Plain-text rendition of the portfolio sections.
pub struct SectionDisplay {
    max_width: usize,
    use_colors: bool,
}

impl Default for SectionDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> usize {
        match terminal::size() {
            Ok((cols, _)) => (cols as usize).clamp(40, 200),
            Err(_) => 80,
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(self.max_width as u16);
        if !self.use_colors {
            table.force_no_tty();
        }
        table
    }

    /// Render every section in document order.
    pub fn render_all(&self, profile: &Profile) -> String {
        SectionId::ALL
            .iter()
            .map(|&id| self.render_section(profile, id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_section(&self, profile: &Profile, id: SectionId) -> String {
        let body = match id {
            SectionId::Home => self.render_home(profile),
            SectionId::About => self.render_about(profile),
            SectionId::Projects => self.render_projects(profile),
            SectionId::Contact => self.render_contact(profile),
        };
        let rule = "─".repeat(self.max_width.min(40));
        format!("{} {}\n{}\n{}", id.icon(), id.label(), rule, body)
    }

    fn render_home(&self, profile: &Profile) -> String {
        let mut lines = vec![profile.name.clone(), profile.role.clone(), String::new()];
        lines.extend(wrap_text(&profile.tagline, self.max_width));
        lines.join("\n") + "\n"
    }

    fn render_about(&self, profile: &Profile) -> String {
        let mut lines = Vec::new();
        for paragraph in &profile.about {
            lines.extend(wrap_text(paragraph, self.max_width));
            lines.push(String::new());
        }
        if !profile.skills.is_empty() {
            lines.push(format!("Skills: {}", profile.skills.join(", ")));
        }
        if let Some(resume) = &profile.resume {
            lines.push(format!("Resume: {}", resume));
        }
        lines.join("\n") + "\n"
    }

    fn render_projects(&self, profile: &Profile) -> String {
        if profile.projects.is_empty() {
            return "No projects yet.\n".to_string();
        }

        let mut table = self.new_table();
        let headers: Vec<Cell> = ["Project", "Description", "Tech", "Link"]
            .iter()
            .map(|h| self.bold_header(h, Color::Cyan))
            .collect();
        table.set_header(headers);
        for project in &profile.projects {
            table.add_row(vec![
                Cell::new(&project.title),
                Cell::new(&project.description),
                Cell::new(project.tech.join(", ")),
                Cell::new(project.link.as_deref().unwrap_or("-")),
            ]);
        }
        format!("{}\n", table)
    }

    fn render_contact(&self, profile: &Profile) -> String {
        let contact = &profile.contact;
        let mut table = self.new_table();

        let mut rows: Vec<(&str, &str)> = Vec::new();
        if let Some(location) = &contact.location {
            rows.push(("Location", location.as_str()));
        }
        rows.push(("Email", contact.email.as_str()));
        if let Some(phone) = &contact.phone {
            rows.push(("Call", phone.as_str()));
        }
        if let Some(whatsapp) = &contact.whatsapp {
            rows.push(("WhatsApp", whatsapp.as_str()));
        }
        for social in &profile.socials {
            rows.push((social.kind.label(), social.href.as_str()));
        }
        for (label, value) in rows {
            table.add_row(vec![self.bold_header(label, Color::Yellow), Cell::new(value)]);
        }

        format!(
            "{}\nSend a message with: folio-cli contact send --name .. --email .. --subject .. --message ..\n",
            table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> SectionDisplay {
        SectionDisplay::new().with_max_width(80).with_colors(false)
    }

    #[test]
    fn test_render_home_has_name_and_role() {
        let profile = Profile::default();
        let output = display().render_section(&profile, SectionId::Home);
        assert!(output.contains("Home"));
        assert!(output.contains(&profile.name));
        assert!(output.contains(&profile.role));
    }

    #[test]
    fn test_render_projects_table() {
        let profile = Profile::default();
        let output = display().render_section(&profile, SectionId::Projects);
        assert!(output.contains("Project"));
        assert!(output.contains("Portfolio"));
    }

    #[test]
    fn test_render_projects_empty() {
        let profile = Profile {
            projects: Vec::new(),
            ..Profile::default()
        };
        let output = display().render_section(&profile, SectionId::Projects);
        assert!(output.contains("No projects yet."));
    }

    #[test]
    fn test_render_contact_lists_email_and_socials() {
        let profile = Profile::default();
        let output = display().render_section(&profile, SectionId::Contact);
        assert!(output.contains("hello@example.com"));
        assert!(output.contains("GitHub"));
    }

    #[test]
    fn test_render_all_in_order() {
        let output = display().render_all(&Profile::default());
        let home = output.find("Home").expect("home rendered");
        let contact = output.find("Contact").expect("contact rendered");
        assert!(home < contact);
    }
}
