//! Rendering automata into the `autos` XML document format.
//!
//! ```text
//! <?xml version="1.1" standalone="no"?>
//! <autos ... xsi:noNamespaceSchemaLocation="autos.xsd">
//!     <auto name="0" neighborhood="Moore">
//!         <state name="0" color="1a2b3c" default="0">
//!             <ts to="1">.3[14]</ts>
//!         </state>
//!     </auto>
//! </autos>
//! ```
//!
//! Rendering is a pure function of the model: the same [`Automaton`] always
//! renders to the same bytes.

use std::fmt;
use std::io::Write;

use tracing::{debug, info_span};

use crate::error::GenerationResult;
use crate::generator::AutomatonGenerator;
use crate::model::{Automaton, State};
use crate::random::RandomSource;

/// Declaration and opening envelope of a batch document.
pub const DOCUMENT_HEADER: &str = concat!(
    "<?xml version=\"1.1\" standalone=\"no\"?>\n",
    "<autos xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xsi:noNamespaceSchemaLocation=\"autos.xsd\">\n",
);

/// Closing envelope of a batch document.
pub const DOCUMENT_FOOTER: &str = "</autos>";

const INDENT: &str = "    ";

/// Displays one automaton as an `<auto>` element.
pub struct AutoXml<'a>(pub &'a Automaton);

impl fmt::Display for AutoXml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.0;
        writeln!(
            f,
            "{INDENT}<auto name=\"{}\" neighborhood=\"{}\">",
            Escaped(&automaton.name),
            automaton.neighborhood
        )?;
        for state in &automaton.states {
            write_state(f, state)?;
        }
        writeln!(f, "{INDENT}</auto>")
    }
}

fn write_state(f: &mut fmt::Formatter<'_>, state: &State) -> fmt::Result {
    writeln!(
        f,
        "{INDENT}{INDENT}<state name=\"{}\" color=\"{}\" default=\"{}\">",
        state.index, state.color, state.default_target
    )?;
    for transition in &state.transitions {
        writeln!(
            f,
            "{INDENT}{INDENT}{INDENT}<ts to=\"{}\">{}</ts>",
            transition.target, transition.rule
        )?;
    }
    writeln!(f, "{INDENT}{INDENT}</state>")
}

/// Escapes the characters that may not appear raw in an attribute value.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Render one automaton as a standalone `<auto>` element.
pub fn render_automaton(automaton: &Automaton) -> String {
    AutoXml(automaton).to_string()
}

/// Render already-built automata as a full document.
pub fn render_document(automata: &[Automaton]) -> String {
    let mut out = String::from(DOCUMENT_HEADER);
    for automaton in automata {
        out.push_str(&render_automaton(automaton));
    }
    out.push_str(DOCUMENT_FOOTER);
    out
}

/// Render already-built automata as a pretty JSON array.
pub fn render_json(automata: &[Automaton]) -> GenerationResult<String> {
    Ok(serde_json::to_string_pretty(automata)?)
}

/// Drives an [`AutomatonGenerator`] and renders its output.
#[derive(Debug, Clone, Default)]
pub struct DocumentSerializer {
    generator: AutomatonGenerator,
}

impl DocumentSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: AutomatonGenerator) -> Self {
        Self { generator }
    }

    /// Generate `n` automata named `"0"` through `"n-1"`.
    pub fn generate_batch(
        &self,
        n: usize,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<Vec<Automaton>> {
        let _span = info_span!("generate_batch", count = n).entered();
        (0..n)
            .map(|i| self.generator.generate(i.to_string(), rng))
            .collect()
    }

    /// Generate and render a full document of `n` automata.
    pub fn serialize_batch(&self, n: usize, rng: &mut impl RandomSource) -> GenerationResult<String> {
        let automata = self.generate_batch(n, rng)?;
        let document = render_document(&automata);
        debug!(count = n, bytes = document.len(), "batch_serialized");
        Ok(document)
    }

    /// Generate and render a single standalone automaton.
    pub fn serialize_one(&self, name: &str, rng: &mut impl RandomSource) -> GenerationResult<String> {
        let automaton = self.generator.generate(name, rng)?;
        Ok(render_automaton(&automaton))
    }

    /// Stream a full document of `n` automata into `writer`.
    ///
    /// Each automaton is rendered and written as soon as it is generated.
    pub fn write_batch<W: Write>(
        &self,
        n: usize,
        rng: &mut impl RandomSource,
        writer: &mut W,
    ) -> GenerationResult<()> {
        let _span = info_span!("write_batch", count = n).entered();
        writer.write_all(DOCUMENT_HEADER.as_bytes())?;
        for i in 0..n {
            let automaton = self.generator.generate(i.to_string(), rng)?;
            write!(writer, "{}", AutoXml(&automaton))?;
        }
        writer.write_all(DOCUMENT_FOOTER.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
