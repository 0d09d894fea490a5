use super::{Definition, DefinitionKind, Directive, FieldDefinition, SchemaGraph};
use std::fmt::{self, Write};

impl SchemaGraph {
    /// Render the graph as a schema definition language document.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SchemaGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.types().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{def}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, self.description.as_deref(), "")?;
        write!(f, "{} {}", self.kind.keyword(), self.name)?;

        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(" & "))?;
        }
        write_directives(f, &self.directives)?;

        match self.kind {
            DefinitionKind::Scalar => {}
            DefinitionKind::Union => {
                if !self.values.is_empty() {
                    write!(f, " = {}", self.values.join(" | "))?;
                }
            }
            DefinitionKind::Enum => {
                f.write_str(" {\n")?;
                for value in &self.values {
                    writeln!(f, "  {value}")?;
                }
                f.write_char('}')?;
            }
            DefinitionKind::InputObject | DefinitionKind::Interface | DefinitionKind::Object => {
                f.write_str(" {\n")?;
                for field in &self.fields {
                    write_field(f, field)?;
                }
                f.write_char('}')?;
            }
        }

        f.write_char('\n')
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &FieldDefinition) -> fmt::Result {
    write_description(f, field.description.as_deref(), "  ")?;
    write!(f, "  {}", field.name)?;

    if !field.arguments.is_empty() {
        f.write_char('(')?;
        for (i, arg) in field.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", arg.name, arg.ty)?;
            if let Some(default) = &arg.default_value {
                write!(f, " = {default}")?;
            }
        }
        f.write_char(')')?;
    }

    write!(f, ": {}", field.ty)?;
    write_directives(f, &field.directives)?;

    f.write_char('\n')
}

fn write_directives(f: &mut fmt::Formatter<'_>, directives: &[Directive]) -> fmt::Result {
    for directive in directives {
        write!(f, " @{}", directive.name)?;
        if !directive.arguments.is_empty() {
            f.write_char('(')?;
            for (i, arg) in directive.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", arg.name, arg.value)?;
            }
            f.write_char(')')?;
        }
    }

    Ok(())
}

fn write_description(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    indent: &str,
) -> fmt::Result {
    match description {
        Some(text) if !text.is_empty() => {
            writeln!(f, "{indent}\"\"\"")?;
            for line in text.lines() {
                writeln!(f, "{indent}{}", line.replace("\"\"\"", "\\\"\"\""))?;
            }
            writeln!(f, "{indent}\"\"\"")
        }
        _ => Ok(()),
    }
}
