//! A compiled encoding plan for one type.

use crate::fold::fold;
use crate::instruction::{Instruction, walk};

/// Flags a renderer needs for its file header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanFeatures {
    /// Some plan iterates a map, so keys must be sorted.
    pub needs_sort: bool,
    /// Some plan writes a string or integer.
    pub needs_format: bool,
}

impl PlanFeatures {
    pub fn union(self, other: Self) -> Self {
        Self {
            needs_sort: self.needs_sort || other.needs_sort,
            needs_format: self.needs_format || other.needs_format,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Declared name of the type the plan encodes.
    pub name: String,
    pub instructions: Vec<Instruction>,
}

impl Plan {
    pub fn new(name: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        Self {
            name: name.into(),
            instructions,
        }
    }

    /// The same plan with adjacent literals merged at every level.
    pub fn folded(self) -> Self {
        Self {
            name: self.name,
            instructions: fold(self.instructions),
        }
    }

    pub fn features(&self) -> PlanFeatures {
        let mut features = PlanFeatures::default();
        walk(&self.instructions, &mut |instr| match instr {
            Instruction::Map { .. } => features.needs_sort = true,
            Instruction::WriteInt(_) | Instruction::WriteString(_) => features.needs_format = true,
            _ => {}
        });
        features
    }

    /// Number of literal instructions at any depth.
    pub fn literal_count(&self) -> usize {
        let mut count = 0;
        walk(&self.instructions, &mut |instr| {
            if instr.is_literal() {
                count += 1;
            }
        });
        count
    }
}

/// Combined features of a set of plans.
pub fn combined_features<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> PlanFeatures {
    plans
        .into_iter()
        .fold(PlanFeatures::default(), |acc, plan| acc.union(plan.features()))
}
