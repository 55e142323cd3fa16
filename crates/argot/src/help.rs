/// A coloring hook: maps one piece of help text to its styled form.
pub type ColorFn = fn(&str) -> String;

/// Optional coloring hooks applied around labeled pieces of help text.
///
/// Absent hooks render uncolored. The demos wire these to the `colored`
/// crate; any `fn(&str) -> String` works.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colors {
    pub(crate) error: Option<ColorFn>,
    pub(crate) header: Option<ColorFn>,
    pub(crate) program: Option<ColorFn>,
    pub(crate) options: Option<ColorFn>,
    pub(crate) commands: Option<ColorFn>,
    pub(crate) description: Option<ColorFn>,
}

impl Colors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook for the `Error: ...` annotation line.
    pub fn error(mut self, hook: ColorFn) -> Self {
        self.error = Some(hook);
        self
    }

    /// Hook for the `Commands` and `Options` section headers.
    pub fn header(mut self, hook: ColorFn) -> Self {
        self.header = Some(hook);
        self
    }

    /// Hook for the program usage line.
    pub fn program(mut self, hook: ColorFn) -> Self {
        self.program = Some(hook);
        self
    }

    /// Hook for option name cells.
    pub fn options(mut self, hook: ColorFn) -> Self {
        self.options = Some(hook);
        self
    }

    /// Hook for command label cells.
    pub fn commands(mut self, hook: ColorFn) -> Self {
        self.commands = Some(hook);
        self
    }

    /// Hook for description cells and the program description.
    pub fn description(mut self, hook: ColorFn) -> Self {
        self.description = Some(hook);
        self
    }

    pub(crate) fn paint(hook: Option<ColorFn>, text: &str) -> String {
        match hook {
            Some(hook) => hook(text),
            None => text.to_string(),
        }
    }
}

/// Snapshot of one scope's help screen.
///
/// Every successful parse carries one, so callers can re-render help without
/// holding on to the registration itself.
#[derive(Debug, Clone)]
pub struct HelpRenderer {
    program_line: String,
    describe: String,
    colors: Colors,
    command_rows: Vec<(String, String)>,
    argument_rows: Vec<(String, String)>,
}

impl HelpRenderer {
    pub(crate) fn new(
        program_line: String,
        describe: String,
        colors: Colors,
        command_rows: Vec<(String, String)>,
        argument_rows: Vec<(String, String)>,
    ) -> Self {
        Self {
            program_line,
            describe,
            colors,
            command_rows,
            argument_rows,
        }
    }

    /// Render the help screen, optionally annotated with an error message.
    ///
    /// Layout: the annotation, the program line, the description, then a
    /// `Commands` section and an `Options` section (options before
    /// positionals), each a two-column list padded to its widest label.
    /// Empty sections are omitted.
    pub fn render(&self, error: Option<&str>) -> String {
        let colors = &self.colors;
        let mut out = String::new();

        if let Some(error) = error {
            out.push_str(&Colors::paint(colors.error, &format!("Error: {error}")));
            out.push_str("\n\n");
        }

        out.push_str(&Colors::paint(colors.program, &self.program_line));
        out.push('\n');

        if !self.describe.is_empty() {
            out.push('\n');
            out.push_str(&Colors::paint(colors.description, &self.describe));
            out.push('\n');
        }

        out.push('\n');

        if !self.command_rows.is_empty() {
            out.push_str(&Colors::paint(colors.header, "Commands"));
            out.push('\n');
            push_rows(&mut out, &self.command_rows, colors.commands, colors.description);
            out.push('\n');
        }

        if !self.argument_rows.is_empty() {
            out.push_str(&Colors::paint(colors.header, "Options"));
            out.push('\n');
            push_rows(&mut out, &self.argument_rows, colors.options, colors.description);
        }

        out
    }
}

fn push_rows(
    out: &mut String,
    rows: &[(String, String)],
    left_hook: Option<ColorFn>,
    right_hook: Option<ColorFn>,
) {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, right) in rows {
        let left = Colors::paint(left_hook, &format!("{left:<width$}"));
        let right = Colors::paint(right_hook, right);
        out.push_str(&format!("  {left}  {right}\n"));
    }
}
