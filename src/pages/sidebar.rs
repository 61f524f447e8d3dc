//! Navigation containers: sidebar, sheet, collapsible, accordion

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

const SIDEBAR: &[PropDoc] = &[
    PropDoc::new(
        "defaultOpen",
        "boolean",
        "Whether collapsible sections start open.",
    ),
    PropDoc::new("children", "ReactNode", "Sidebar links and content."),
];

const SHEET: &[PropDoc] = &[
    PropDoc::new(
        "side",
        "'left' | 'right' | 'top' | 'bottom'",
        "Direction the sheet opens from.",
    ),
    PropDoc::new("defaultOpen", "boolean", "Whether sheet is open by default."),
    PropDoc::new(
        "onOpenChange",
        "(open: boolean) => void",
        "Callback when sheet opens/closes.",
    ),
];

const COLLAPSIBLE: &[PropDoc] = &[
    PropDoc::new(
        "defaultOpen",
        "boolean",
        "Whether collapsible is open by default.",
    ),
    PropDoc::new(
        "onOpenChange",
        "(open: boolean) => void",
        "Callback when collapsible opens/closes.",
    ),
];

const ACCORDION: &[PropDoc] = &[
    PropDoc::new(
        "type",
        "'single' | 'multiple'",
        "Single or multiple sections can be open.",
    ),
    PropDoc::new("defaultValue", "string | string[]", "Which sections start open."),
    PropDoc::new(
        "onValueChange",
        "(value) => void",
        "Called when open sections change.",
    ),
];

const SIDEBAR_CODE: &str = r#"<Collapsible defaultOpen>
  <CollapsibleTrigger>Projects</CollapsibleTrigger>
  <CollapsibleContent>Links inside collapsible</CollapsibleContent>
</Collapsible>"#;

const SHEET_CODE: &str = r#"<Sheet>
  <SheetTrigger asChild><Button>Open</Button></SheetTrigger>
  <SheetContent side="left">Sheet content</SheetContent>
</Sheet>"#;

const COLLAPSIBLE_CODE: &str = r#"<Collapsible>
  <CollapsibleTrigger>Section</CollapsibleTrigger>
  <CollapsibleContent>Content</CollapsibleContent>
</Collapsible>"#;

const ACCORDION_CODE: &str = r#"<Accordion type="multiple" defaultValue={['team']}>
  <AccordionItem value="team">
    <AccordionTrigger>Team</AccordionTrigger>
    <AccordionContent>Content here</AccordionContent>
  </AccordionItem>
</Accordion>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("Sidebar", SIDEBAR_CODE, SIDEBAR)
        .entry("Sheet", SHEET_CODE, SHEET)
        .entry("Collapsible", COLLAPSIBLE_CODE, COLLAPSIBLE)
        .entry("Accordion", ACCORDION_CODE, ACCORDION)
        .build();

    Page {
        id: PageId::Sidebar,
        title: "Sidebar / Sheet / Collapsible / Accordion Demo",
        subtitle: "Sidebar with nested navigation",
        panel_title: "Component Props & Explanations",
        default_selection: "Sidebar",
        registry,
        cards: vec![
            ExampleCard::new(
                "Sidebar",
                "Sidebar",
                "Projects section, Space to fold",
                Preview::SidebarNav,
            ),
            ExampleCard::new(
                "Collapsible",
                "Collapsible",
                "Press Space to open or close",
                Preview::Collapsible,
            ),
            ExampleCard::new(
                "Accordion",
                "Accordion",
                "←/→ to move between sections, Space to fold",
                Preview::Accordion,
            ),
            ExampleCard::new(
                "Sheet",
                "Sheet",
                "←/→ to choose a side, Space to open",
                Preview::Sheet,
            ),
        ],
    }
}
