//! Buttons page: variants, sizes, states, icons, events

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

const VARIANTS: &[PropDoc] = &[
    PropDoc::new(
        "variant",
        "'default' | 'secondary' | 'destructive' | 'outline' | 'ghost' | 'link'",
        "Visual style of the button. Default (primary blue), secondary (gray), destructive \
         (red/danger), outline (border only), ghost (transparent with hover), link (text link style).",
    ),
    PropDoc::new(
        "className",
        "string",
        "Additional CSS classes to customize the button appearance beyond the variant styles.",
    ),
];

const SIZES: &[PropDoc] = &[
    PropDoc::new(
        "size",
        "'default' | 'sm' | 'lg' | 'icon'",
        "Button size: default (medium), sm (small/compact), lg (large with more padding), icon \
         (square button for icons only).",
    ),
    PropDoc::new(
        "asChild",
        "boolean",
        "When true, renders the button as its child element (useful for wrapping links or other \
         elements while maintaining button styling).",
    ),
];

const STATES: &[PropDoc] = &[
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables the button when true. Prevents clicks, applies disabled styling (grayed out), \
         and sets aria-disabled attribute.",
    ),
    PropDoc::new(
        "loading",
        "boolean",
        "Shows loading state. Typically used with a spinner icon and disabled state to prevent \
         multiple submissions.",
    ),
    PropDoc::new(
        "type",
        "'button' | 'submit' | 'reset'",
        "HTML button type. Use 'submit' for form submissions, 'button' for regular clicks, \
         'reset' to clear forms.",
    ),
];

const ICONS: &[PropDoc] = &[
    PropDoc::new(
        "children",
        "ReactNode",
        "Content inside the button. Can include text, icons, or any React elements. Use Lucide \
         icons for consistency.",
    ),
    PropDoc::new(
        "leftIcon",
        "ReactNode",
        "Icon placed on the left side of button text. Typically wrapped with margin classes like 'mr-2'.",
    ),
    PropDoc::new(
        "rightIcon",
        "ReactNode",
        "Icon placed on the right side of button text. Typically wrapped with margin classes like 'ml-2'.",
    ),
];

const EVENTS: &[PropDoc] = &[
    PropDoc::new(
        "onClick",
        "(e: MouseEvent) => void",
        "Click event handler. Called when button is clicked (if not disabled). Receives the click \
         event object.",
    ),
    PropDoc::new(
        "onMouseEnter",
        "(e: MouseEvent) => void",
        "Mouse enter event handler. Called when mouse pointer enters the button area. Useful for \
         hover effects.",
    ),
    PropDoc::new(
        "onMouseLeave",
        "(e: MouseEvent) => void",
        "Mouse leave event handler. Called when mouse pointer leaves the button area.",
    ),
    PropDoc::new(
        "onFocus",
        "(e: FocusEvent) => void",
        "Focus event handler. Called when button receives keyboard focus. Important for accessibility.",
    ),
];

const VARIANTS_CODE: &str = r#"import { Button } from "@/components/ui/button";

// Default (Primary)
<Button>Default</Button>

// Secondary (Muted)
<Button variant="secondary">Secondary</Button>

// Destructive (Danger/Delete)
<Button variant="destructive">Destructive</Button>

// Outline (Border only)
<Button variant="outline">Outline</Button>

// Ghost (Transparent with hover)
<Button variant="ghost">Ghost</Button>

// Link (Text link style)
<Button variant="link">Link</Button>"#;

const SIZES_CODE: &str = r#"import { Button } from "@/components/ui/button";
import { ArrowRight } from "lucide-react";

// Small
<Button size="sm">Small</Button>

// Default (Medium)
<Button size="default">Default</Button>

// Large
<Button size="lg">Large</Button>

// Icon (Square)
<Button size="icon">
  <ArrowRight className="h-4 w-4" />
</Button>"#;

const STATES_CODE: &str = r#"import { Button } from "@/components/ui/button";
import { Loader2 } from "lucide-react";

// Disabled
<Button disabled>Disabled</Button>

// Loading state
<Button disabled>
  <Loader2 className="mr-2 h-4 w-4 animate-spin" />
  Loading
</Button>

// With click handler
<Button onClick={() => console.log('Clicked!')}>
  Click Me
</Button>"#;

const ICONS_CODE: &str = r#"import { Button } from "@/components/ui/button";
import { ArrowRight, Download, Mail } from "lucide-react";

// Icon on the right
<Button>
  Continue
  <ArrowRight className="ml-2 h-4 w-4" />
</Button>

// Icon on the left
<Button>
  <Mail className="mr-2 h-4 w-4" />
  Send Email
</Button>

// Icon only
<Button size="icon">
  <Download className="h-4 w-4" />
</Button>"#;

const EVENTS_CODE: &str = r#"import { Button } from "@/components/ui/button";
import { useState } from "react";

const [count, setCount] = useState(0);

<Button onClick={() => setCount(count + 1)}>
  Clicked {count} times
</Button>

<Button
  onMouseEnter={() => console.log('Hovered')}
  onFocus={() => console.log('Focused')}
>
  Hover or Focus Me
</Button>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("variants", VARIANTS_CODE, VARIANTS)
        .entry("sizes", SIZES_CODE, SIZES)
        .entry("states", STATES_CODE, STATES)
        .entry("icons", ICONS_CODE, ICONS)
        .entry("events", EVENTS_CODE, EVENTS)
        .build();

    Page {
        id: PageId::Buttons,
        title: "Buttons - Interactive Demo",
        subtitle: "Complete button component showcase",
        panel_title: "Button Props",
        default_selection: "variants",
        registry,
        cards: vec![
            ExampleCard::new(
                "variants",
                "Variants",
                "Choose from 6 different visual styles to match your UI needs",
                Preview::ButtonVariants,
            ),
            ExampleCard::new(
                "sizes",
                "Sizes",
                "4 sizes available: small, default, large, and icon-only square buttons",
                Preview::ButtonSizes,
            ),
            ExampleCard::new(
                "states",
                "States",
                "Disabled, loading and interactive states. Press Space to simulate loading",
                Preview::ButtonStates,
            ),
            ExampleCard::new(
                "icons",
                "With Icons",
                "Combine icons with text on either side, or use icon-only buttons",
                Preview::ButtonIcons,
            ),
            ExampleCard::new(
                "events",
                "Event Handlers",
                "Click, hover and focus handlers. Press Space to click",
                Preview::ButtonEvents,
            ),
        ],
    }
}
