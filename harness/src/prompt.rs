//! Interactive prompts: read names and settle ambiguous ones.
//!
//! Generic over the input and output streams so the whole exchange can be
//! driven from a test with in-memory buffers.

use std::io::{self, BufRead, Write};

use costar_kernel::dataset::{DatasetStore, PersonId};

use crate::resolve::{choose_candidate, resolve_person, Candidate, PersonMatch};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the streams. End of input yields `""`.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a name and resolve it, prompting for an id if it is shared.
    ///
    /// Returns `None` when nobody has the name or the chosen id is not one of
    /// the listed candidates.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the streams.
    pub fn ask_person(&mut self, store: &DatasetStore) -> io::Result<Option<PersonId>> {
        let name = self.ask("Name: ")?;
        match resolve_person(store, &name) {
            PersonMatch::Unique(id) => Ok(Some(id)),
            PersonMatch::NotFound => Ok(None),
            PersonMatch::Ambiguous(candidates) => self.disambiguate(&name, &candidates),
        }
    }

    fn disambiguate(
        &mut self,
        name: &str,
        candidates: &[Candidate],
    ) -> io::Result<Option<PersonId>> {
        writeln!(self.output, "Which '{name}'?")?;
        for c in candidates {
            writeln!(
                self.output,
                "ID: {}, Name: {}, Birth: {}",
                c.id,
                c.name,
                c.birth.as_deref().unwrap_or("")
            )?;
        }
        let answer = self.ask("Intended Person ID: ")?;
        Ok(choose_candidate(candidates, &answer))
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
