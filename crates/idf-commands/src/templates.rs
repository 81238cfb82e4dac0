//! Built-in command template pairs.
//!
//! A template pair is one per-identity command template plus one fixed
//! refresh command. The refresh command is record-independent and is used
//! verbatim, never rendered.

/// A per-identity command template and its batch refresh command.
#[derive(Debug, Clone, Copy)]
pub struct CommandTemplates<'a> {
    /// Per-identity mapping command. Named placeholders: `mainframe_id`,
    /// `distributed_id`, `registry`, `user_name`; quoted values go through
    /// the `escape` helper.
    pub command: &'a str,
    /// Fixed command appended once after a successful batch.
    pub refresh: &'a str,
}

impl CommandTemplates<'static> {
    /// The RACF template pair: `RACMAP` per identity, `SETROPTS` refresh.
    pub fn racf() -> Self {
        Self {
            command: include_str!("../templates/racf.hbs"),
            refresh: include_str!("../templates/racf_refresh.hbs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandTemplates;

    #[test]
    fn racf_templates_are_single_lines() {
        let templates = CommandTemplates::racf();
        assert!(!templates.command.contains('\n'));
        assert!(!templates.refresh.contains('\n'));
        assert!(templates.command.starts_with("RACMAP ID("));
        assert_eq!(templates.refresh, "SETROPTS RACLIST(IDIDMAP) REFRESH");
    }
}
