// crates/scaffold_project/src/plan.rs

/// Role of one required markdown document, looked up by fixed filename in
/// the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocRole {
    Setup,
    McpServers,
    Agents,
}

impl DocRole {
    pub const ALL: [DocRole; 3] = [DocRole::Setup, DocRole::McpServers, DocRole::Agents];

    pub fn filename(self) -> &'static str {
        match self {
            DocRole::Setup => "wandr-ai-setup.md",
            DocRole::McpServers => "mcp-servers-implementation.md",
            DocRole::Agents => "agents-implementation.md",
        }
    }
}

/// How a step picks its block when the label alone does not identify one.
#[derive(Debug, Clone, Copy)]
pub enum Selector {
    /// First labeled block in document order.
    First,
    /// Zero-based Nth occurrence of the label, in document order.
    Nth(usize),
    /// First occurrence in the text following the given literal heading.
    InSection(&'static str),
}

/// One entry of the extraction plan: which document to search, what label
/// and fence language to match, where the block body lands on disk, and
/// how to disambiguate recurring labels.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionStep {
    pub doc: DocRole,
    pub label: &'static str,
    pub language: &'static str,
    pub destination: &'static str,
    pub selector: Selector,
}

const GOOGLE_MAPS_SECTION: &str = "## Google Maps MCP Server";

/// The full ordered plan. Steps run strictly in this order; a label miss
/// skips the step without touching the rest. Duplicate labels in the MCP
/// document resolve positionally (reddit first, google-maps second) except
/// for `src/index.ts`, whose owner depends on the enclosing section.
pub const EXTRACTION_PLAN: &[ExtractionStep] = &[
    ExtractionStep {
        doc: DocRole::Setup,
        label: "lib/utils/types.ts",
        language: "typescript",
        destination: "lib/utils/types.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Setup,
        label: "lib/supabase/client.ts",
        language: "typescript",
        destination: "lib/supabase/client.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Setup,
        label: "lib/supabase/server.ts",
        language: "typescript",
        destination: "lib/supabase/server.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Setup,
        label: "supabase/migrations/001_initial_schema.sql",
        language: "sql",
        destination: "supabase/migrations/001_initial_schema.sql",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "package.json",
        language: "json",
        destination: "mcp-servers/reddit/package.json",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "tsconfig.json",
        language: "json",
        destination: "mcp-servers/reddit/tsconfig.json",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "src/index.ts",
        language: "typescript",
        destination: "mcp-servers/reddit/src/index.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "package.json",
        language: "json",
        destination: "mcp-servers/google-maps/package.json",
        selector: Selector::Nth(1),
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "tsconfig.json",
        language: "json",
        destination: "mcp-servers/google-maps/tsconfig.json",
        selector: Selector::Nth(1),
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "src/index.ts",
        language: "typescript",
        destination: "mcp-servers/google-maps/src/index.ts",
        selector: Selector::InSection(GOOGLE_MAPS_SECTION),
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "lib/mcp/reddit-client.ts",
        language: "typescript",
        destination: "lib/mcp/reddit-client.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::McpServers,
        label: "lib/mcp/google-maps-client.ts",
        language: "typescript",
        destination: "lib/mcp/google-maps-client.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Agents,
        label: "lib/agents/agent1-parser.ts",
        language: "typescript",
        destination: "lib/agents/agent1-parser.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Agents,
        label: "lib/agents/agent2-researcher.ts",
        language: "typescript",
        destination: "lib/agents/agent2-researcher.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Agents,
        label: "lib/agents/agent3-optimizer.ts",
        language: "typescript",
        destination: "lib/agents/agent3-optimizer.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Agents,
        label: "lib/agents/agent4-storyteller.ts",
        language: "typescript",
        destination: "lib/agents/agent4-storyteller.ts",
        selector: Selector::First,
    },
    ExtractionStep {
        doc: DocRole::Agents,
        label: "lib/agents/orchestrator.ts",
        language: "typescript",
        destination: "lib/agents/orchestrator.ts",
        selector: Selector::First,
    },
];
