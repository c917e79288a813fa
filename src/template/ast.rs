use crate::types::FieldPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAst {
    pub segments: SegmentsAst,
    pub verb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentsAst {
    pub segments: Vec<SegmentAst>,
}

impl SegmentsAst {
    pub fn new(segments: Vec<SegmentAst>) -> Self {
        Self { segments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentAst {
    DoubleStar,
    Star,
    Literal(String),
    Variable(VariableAst),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAst {
    pub fields: FieldPath,
    pub segments: Option<SegmentsAst>,
}

impl VariableAst {
    pub fn new(fields: FieldPath, segments: Option<SegmentsAst>) -> Self {
        Self { fields, segments }
    }

    pub fn field_path(&self) -> String {
        self.fields.join(".")
    }
}
