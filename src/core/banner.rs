use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Fixed product description printed on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub intro: &'static str,
    pub features: &'static [&'static str],
    pub docs: &'static [DocLink],
    pub closing: &'static str,
    pub rule_width: usize,
}

pub const VERIDION_BANNER: Banner = Banner {
    title: "Véridion AI - Quality Orchestrator",
    intro: "Initializing AI-Driven Verification Platform...",
    features: &[
        "AI-Powered Requirement Synthesis",
        "Intelligent Test Case Generation",
        "Automated Script Development",
        "Smart Bug Triaging",
        "Executive Analytics Dashboard",
    ],
    docs: &[
        DocLink {
            label: "Blueprint",
            path: "./VERIDION_BLUEPRINT.md",
        },
        DocLink {
            label: "Architecture",
            path: "./docs/ARCHITECTURE_DIAGRAM.md",
        },
        DocLink {
            label: "API Spec",
            path: "./docs/API_SPECIFICATION.md",
        },
        DocLink {
            label: "Implementation",
            path: "./docs/IMPLEMENTATION_GUIDE.md",
        },
        DocLink {
            label: "AI Prompts",
            path: "./docs/AI_PROMPT_LIBRARY.md",
        },
    ],
    closing: "Ready to revolutionize your QA process!",
    rule_width: 60,
};

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(self.rule_width);

        writeln!(f, "{}", rule)?;
        writeln!(f, "🚀 {}", self.title)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "\n📋 {}", self.intro)?;

        writeln!(f, "\n✨ Key Features:")?;
        for feature in self.features {
            writeln!(f, "  • {}", feature)?;
        }

        writeln!(f, "\n🔗 Documentation:")?;
        for doc in self.docs {
            writeln!(f, "  • {}: {}", doc.label, doc.path)?;
        }

        writeln!(f, "\n💡 {}", self.closing)?;
        writeln!(f, "{}", rule)
    }
}

impl Banner {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}
