use std::fmt;

use super::compiled::CompiledRoute;

impl CompiledRoute {
    /// Canonical template text. Every capture is written in the
    /// `{field.path=seg/seg}` form, including bare `{x}` captures.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.segments.len();
        let mut captures = self.variables.iter().peekable();
        let mut index = 0usize;

        while index < len {
            f.write_str("/")?;

            let capture = captures.next_if(|capture| capture.start == index);
            let Some(capture) = capture else {
                f.write_str(self.segments[index].as_str())?;
                index += 1;
                continue;
            };

            let last = capture.last_index(len).unwrap_or(index);
            write!(f, "{{{}=", capture.field_path())?;
            for (offset, segment) in self.segments[index..=last].iter().enumerate() {
                if offset > 0 {
                    f.write_str("/")?;
                }
                f.write_str(segment.as_str())?;
            }
            f.write_str("}")?;
            index = last + 1;
        }

        if let Some(verb) = &self.verb {
            write!(f, ":{verb}")?;
        }
        Ok(())
    }
}
