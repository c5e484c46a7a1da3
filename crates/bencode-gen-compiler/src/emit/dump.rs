//! Plan listing backend, for inspecting what the compiler produced.

use bencode_gen_core::Colors;
use bencode_gen_plan::dump::dump_plan;

use super::Backend;
use crate::generator::GeneratedType;

#[derive(Clone, Copy, Debug, Default)]
pub struct DumpBackend {
    colors: Colors,
}

impl DumpBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}

impl Backend for DumpBackend {
    fn render(&self, module: Option<&str>, types: &[GeneratedType]) -> String {
        let c = self.colors;
        let mut out = String::new();
        if let Some(module) = module {
            out.push_str(&c.paint(c.dim, &format!("# module {module}")));
            out.push_str("\n\n");
        }
        for (i, generated) in types.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            dump_plan(&mut out, &generated.plan, c);
        }
        out
    }
}
