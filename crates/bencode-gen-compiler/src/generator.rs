//! Generator facade: choose the types to generate and compile each one.

use bencode_gen_core::{TypeDesc, TypeId};
use bencode_gen_plan::plan::combined_features;
use bencode_gen_plan::{Plan, PlanFeatures};

use crate::collect::has_tagged_field;
use crate::compile::{CompileError, compile_type};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::schema::Schema;

/// Selects every tagged struct when given as a requested name.
pub const SELECT_ALL: &str = "*";

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub(crate) fold: bool,
    pub(crate) alias_roots: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fold: true,
            alias_roots: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge adjacent literals in generated plans (on by default).
    pub fn fold(mut self, value: bool) -> Self {
        self.fold = value;
        self
    }

    /// Also select explicitly named types that are not structs.
    ///
    /// Their plans can be dumped or executed, but a Rust type alias cannot
    /// carry its own `Bencode` impl, so this is off by default.
    pub fn alias_roots(mut self, value: bool) -> Self {
        self.alias_roots = value;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedType {
    pub name: String,
    pub plan: Plan,
}

/// A type whose plan could not be compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeFailure {
    pub name: String,
    pub error: CompileError,
}

#[derive(Clone, Debug, Default)]
pub struct GenerateOutput {
    pub types: Vec<GeneratedType>,
    pub failures: Vec<TypeFailure>,
    /// Warnings, plus one error per failure.
    pub diagnostics: Diagnostics,
}

impl GenerateOutput {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn features(&self) -> PlanFeatures {
        combined_features(self.types.iter().map(|t| &t.plan))
    }

    pub fn plans(&self) -> Vec<Plan> {
        self.types.iter().map(|t| t.plan.clone()).collect()
    }
}

pub struct Generator<'s> {
    schema: &'s Schema,
    config: GeneratorConfig,
}

impl<'s> Generator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_config(schema, GeneratorConfig::default())
    }

    pub fn with_config(schema: &'s Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Resolve requested names to the declared types to generate, sorted by name.
    ///
    /// An empty request, or one containing `*`, selects every declared struct
    /// with at least one tagged field. Explicitly named types must be structs
    /// unless alias roots are enabled.
    pub fn select(
        &self,
        requested: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Vec<(String, TypeId)> {
        let table = self.schema.table();
        let select_all = requested.is_empty() || requested.iter().any(|n| n == SELECT_ALL);
        let is_struct = |id: TypeId| matches!(table.get(table.underlying(id)), TypeDesc::Struct(_));

        let mut selected: Vec<(String, TypeId)> = if select_all {
            table
                .declared()
                .filter(|(_, id)| !table.is_native(*id))
                .filter(|(_, id)| is_struct(*id))
                .filter(|(name, id)| has_tagged_field(table, name, *id, diagnostics))
                .map(|(name, id)| (name.to_string(), id))
                .collect()
        } else {
            let mut named = Vec::new();
            for name in requested {
                match table.lookup(name) {
                    Some(id) if table.is_native(id) => {
                        log::debug!("skipping {name}: it has a native encoder");
                    }
                    Some(id) if !self.config.alias_roots && !is_struct(id) => diagnostics
                        .report(DiagnosticKind::NonStructRoot, "schema")
                        .message(name)
                        .emit(),
                    Some(id) => named.push((name.clone(), id)),
                    None => diagnostics
                        .report(DiagnosticKind::UnknownRequestedType, "schema")
                        .message(name)
                        .emit(),
                }
            }
            named
        };

        selected.sort_by(|a, b| a.0.cmp(&b.0));
        selected.dedup_by(|a, b| a.0 == b.0);
        selected
    }

    /// Compile one declared type.
    pub fn generate_type(
        &self,
        name: &str,
        ty: TypeId,
        diagnostics: &mut Diagnostics,
    ) -> Result<Plan, CompileError> {
        log::debug!("generating implementation for {name}");
        let plan = compile_type(self.schema.table(), name, ty, diagnostics)?;
        Ok(if self.config.fold { plan.folded() } else { plan })
    }

    /// Select and compile. A failing type is recorded and the rest still compile.
    pub fn generate(&self, requested: &[String]) -> GenerateOutput {
        let mut output = GenerateOutput::default();
        let selected = self.select(requested, &mut output.diagnostics);
        if selected.is_empty() {
            log::info!("no types selected for generation");
        }

        for (name, ty) in selected {
            match self.generate_type(&name, ty, &mut output.diagnostics) {
                Ok(plan) => output.types.push(GeneratedType { name, plan }),
                Err(error) => {
                    log::debug!("{name}: {error}");
                    error.report(&name, &mut output.diagnostics);
                    output.failures.push(TypeFailure { name, error });
                }
            }
        }
        output
    }
}
