//! Overlay components: dialog, popover, alert dialog, toast, hover card
//!
//! The page also carries a tooltip card that has no registry entry, so
//! selecting it shows the placeholder snippet.

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

const DIALOG: &[PropDoc] = &[
    PropDoc::new("open", "boolean", "Controls dialog visibility"),
    PropDoc::new(
        "onOpenChange",
        "(open:boolean)=>void",
        "Callback when open state changes",
    ),
];

const POPOVER: &[PropDoc] = &[
    PropDoc::new("open", "boolean", "Popover visibility"),
    PropDoc::new("trigger", "ReactNode", "Element that triggers popover"),
];

const ALERT_DIALOG: &[PropDoc] = &[
    PropDoc::new("open", "boolean", "Controls AlertDialog visibility"),
    PropDoc::new("onOpenChange", "(open:boolean)=>void", "Callback on state change"),
];

const TOAST: &[PropDoc] = &[
    PropDoc::new("title", "string", "Title of the toast"),
    PropDoc::new("description", "string", "Optional description"),
    PropDoc::new("duration", "number", "Time in ms before toast disappears"),
    PropDoc::new("action", "ReactNode", "Optional button/action inside the toast"),
];

const HOVER_CARD: &[PropDoc] = &[
    PropDoc::new(
        "open / defaultOpen",
        "boolean",
        "Controls whether the hover card is open. Use controlled open for external state.",
    ),
    PropDoc::new(
        "openDelay",
        "number",
        "Time in ms to wait before opening the hover card after hover.",
    ),
    PropDoc::new(
        "closeDelay",
        "number",
        "Time in ms to wait before closing the hover card after unhover.",
    ),
    PropDoc::new(
        "onOpenChange",
        "(open: boolean) => void",
        "Callback when open state changes.",
    ),
    PropDoc::new(
        "children",
        "ReactNode",
        "Trigger and content slots (usually HoverCardTrigger + HoverCardContent).",
    ),
];

const DIALOG_CODE: &str = r#"<Dialog>
<DialogTrigger asChild><Button>Open Dialog</Button></DialogTrigger>
<DialogContent>
  <DialogHeader>
    <DialogTitle>Dialog Title</DialogTitle>
    <DialogDescription>Description here</DialogDescription>
  </DialogHeader>
  <DialogFooter>
    <Button>Close</Button>
  </DialogFooter>
</DialogContent>
</Dialog>"#;

const POPOVER_CODE: &str = r#"<Popover>
<PopoverTrigger asChild><Button>Open Popover</Button></PopoverTrigger>
<PopoverContent>Popover content</PopoverContent>
</Popover>"#;

const ALERT_DIALOG_CODE: &str = r#"<AlertDialog>
<AlertDialogTrigger asChild><Button>Delete</Button></AlertDialogTrigger>
<AlertDialogContent>
  <AlertDialogHeader>
    <AlertDialogTitle>Are you sure?</AlertDialogTitle>
    <AlertDialogDescription>Deleting cannot be undone.</AlertDialogDescription>
  </AlertDialogHeader>
  <AlertDialogCancel>Cancel</AlertDialogCancel>
  <AlertDialogAction>Delete</AlertDialogAction>
</AlertDialogContent>
</AlertDialog>"#;

const TOAST_CODE: &str = r#"<Button onClick={() => toast('This is a toast!')}>Show Toast</Button>"#;

const HOVER_CARD_CODE: &str = r#"<HoverCard>
  <HoverCardTrigger asChild>
    <Button variant="link">@nextjs</Button>
  </HoverCardTrigger>
  <HoverCardContent className="w-80">
    <div className="flex justify-between space-x-4">
      <Avatar>
        <AvatarImage src="https://github.com/shadcn.png" />
        <AvatarFallback>VC</AvatarFallback>
      </Avatar>
      <div className="space-y-1">
        <h4 className="text-sm font-semibold">@nextjs</h4>
        <p className="text-sm">
          The React Framework - created and maintained by @vercel.
        </p>
        <div className="flex items-center pt-2">
          <CalendarDays className="mr-2 h-4 w-4 opacity-70" />{" "}
          <span className="text-xs text-muted-foreground">
            Joined December 2021
          </span>
        </div>
      </div>
    </div>
  </HoverCardContent>
</HoverCard>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("Dialog", DIALOG_CODE, DIALOG)
        .entry("Popover", POPOVER_CODE, POPOVER)
        .entry("AlertDialog", ALERT_DIALOG_CODE, ALERT_DIALOG)
        .entry("Toast", TOAST_CODE, TOAST)
        .entry("HoverCard", HOVER_CARD_CODE, HOVER_CARD)
        .build();

    Page {
        id: PageId::Dialog,
        title: "Dialog Components Demo",
        subtitle: "Modals, alerts, popovers and toasts",
        panel_title: "Component Props",
        default_selection: "Dialog",
        registry,
        cards: vec![
            ExampleCard::new(
                "Dialog",
                "Dialog Demo",
                "Press Space to open a modal dialog",
                Preview::Dialog,
            ),
            ExampleCard::new(
                "Popover",
                "Popover Demo",
                "Floating content anchored to a trigger",
                Preview::Popover,
            ),
            ExampleCard::new(
                "AlertDialog",
                "AlertDialog Demo",
                "Press Space to confirm a destructive action",
                Preview::AlertDialog,
            ),
            ExampleCard::new(
                "Toast",
                "Toast / Sonner Demo",
                "Press Space to show a toast notification",
                Preview::Toast,
            ),
            ExampleCard::new(
                "HoverCard",
                "Hover Card",
                "Rich preview shown while hovering a link",
                Preview::HoverCard,
            ),
            ExampleCard::new("Tooltip", "Tooltip", "Add to library", Preview::Tooltip),
        ],
    }
}
