use crate::areas::comparison::Comparison;
use crate::artifacts::patch::synthesizer::PatchSynthesizer;
use crate::artifacts::render::LinePrefixes;
use crate::debug_log;

impl Comparison {
    /// Prints the commands that turn the first configuration into the second,
    /// nested under the sections that must be entered to issue them
    pub fn patch(&self, raw: bool, negation_marker: &str) -> anyhow::Result<()> {
        let patch = PatchSynthesizer::new(self.aligned(), negation_marker).synthesize();
        debug_log!("patch: {} commands", patch.len());

        self.print(patch.tree(), LinePrefixes::diff(), raw)
    }
}
