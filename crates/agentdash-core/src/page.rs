//! Dashboard pages and their static header text

use serde::{Deserialize, Serialize};

/// A mutually exclusive view of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Mcp,
    Rag,
    Agents,
    Langgraph,
    Ftops,
    Security,
}

/// Header text for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Page {
    /// Pages in navigation order; index + 1 is the digit shortcut
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Mcp,
        Page::Rag,
        Page::Agents,
        Page::Langgraph,
        Page::Ftops,
        Page::Security,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Mcp => "mcp",
            Page::Rag => "rag",
            Page::Agents => "agents",
            Page::Langgraph => "langgraph",
            Page::Ftops => "ftops",
            Page::Security => "security",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Page for a `1`..`7` shortcut
    pub fn from_digit(digit: char) -> Option<Page> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Page {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Short label used in the navigation bar
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Mcp => "MCP Engine",
            Page::Rag => "RAG Engine",
            Page::Agents => "Agents",
            Page::Langgraph => "LangGraph",
            Page::Ftops => "FT-Ops",
            Page::Security => "Security",
        }
    }

    pub fn header(self) -> PageHeader {
        let (title, subtitle) = match self {
            Page::Dashboard => ("Dashboard", "Overview of your AI platform"),
            Page::Mcp => ("MCP Engine", "Model Context Protocol servers and tools"),
            Page::Rag => ("RAG Engine", "Retrieval pipeline and document index"),
            Page::Agents => ("Agent Engine", "Manage and monitor autonomous agents"),
            Page::Langgraph => ("LangGraph Runtime", "Graph workflows and execution traces"),
            Page::Ftops => ("FT-Ops Pipeline", "Fine-tuning jobs and model registry"),
            Page::Security => ("Defensive Security", "OWASP test suites and findings"),
        };
        PageHeader { title, subtitle }
    }

    /// Static body text for pages without live data
    pub fn description(self) -> &'static [&'static str] {
        match self {
            Page::Dashboard => &[],
            Page::Mcp => &[
                "Connected servers: 12",
                "Registered tools: 48",
                "Transport: stdio / http",
            ],
            Page::Rag => &[
                "Indexed documents: 1,847",
                "Chunks: 23,410",
                "Grounding checks: enabled",
            ],
            Page::Agents => &[],
            Page::Langgraph => &[
                "Graphs deployed: 6",
                "Checkpointer: memory",
                "Last run: succeeded",
            ],
            Page::Ftops => &[
                "Models trained: 8",
                "Queued jobs: 2",
                "Registry: 14 versions",
            ],
            Page::Security => &[
                "Security score: 94",
                "Open findings: 3 (low)",
                "Suites: OWASP LLM Top 10",
            ],
        }
    }

    /// Address fragment for this page, e.g. `#agents`
    pub fn fragment(self) -> String {
        format!("#{}", self.key())
    }

    /// Parse an address fragment. The leading `#` is optional.
    pub fn from_fragment(fragment: &str) -> Option<Page> {
        let key = fragment.trim();
        Self::from_key(key.strip_prefix('#').unwrap_or(key))
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
            assert_eq!(Page::from_fragment(&page.fragment()), Some(page));
        }
        assert_eq!(Page::from_key("settings"), None);
        assert_eq!(Page::from_key("Dashboard"), None);
    }

    #[test]
    fn test_digits() {
        assert_eq!(Page::from_digit('1'), Some(Page::Dashboard));
        assert_eq!(Page::from_digit('4'), Some(Page::Agents));
        assert_eq!(Page::from_digit('7'), Some(Page::Security));
        assert_eq!(Page::from_digit('0'), None);
        assert_eq!(Page::from_digit('8'), None);
        assert_eq!(Page::from_digit('x'), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Page::Security.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.previous(), Page::Security);
        assert_eq!(Page::Rag.next(), Page::Agents);
    }

    #[test]
    fn test_fragment_parsing() {
        assert_eq!(Page::from_fragment("#rag"), Some(Page::Rag));
        assert_eq!(Page::from_fragment("rag"), Some(Page::Rag));
        assert_eq!(Page::from_fragment(" #ftops\n"), Some(Page::Ftops));
        assert_eq!(Page::from_fragment("#"), None);
        assert_eq!(Page::from_fragment(""), None);
    }

    #[test]
    fn test_every_page_has_a_header() {
        for page in Page::ALL {
            let header = page.header();
            assert!(!header.title.is_empty());
            assert!(!header.subtitle.is_empty());
        }
    }
}
