//! Fragments page: composite components for richer interactions

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

/// Breadcrumb trail shown by the preview
pub const BREADCRUMB_TRAIL: &[&str] = &["Home", "Products", "Electronics", "Laptops"];

const COMBOBOX: &[PropDoc] = &[
    PropDoc::new(
        "value",
        "string",
        "Currently selected value. Should match one of the ComboboxItem values.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: string) => void",
        "Callback fired when selection changes. Receives the new selected value.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables the combobox when true. User cannot open dropdown or search.",
    ),
    PropDoc::new(
        "placeholder",
        "string",
        "Placeholder text shown when no value is selected.",
    ),
    PropDoc::new(
        "searchPlaceholder",
        "string",
        "Placeholder text for the search input inside the dropdown.",
    ),
    PropDoc::new(
        "emptyMessage",
        "string",
        "Message displayed when search returns no results. Default: 'No results found.'",
    ),
];

const DATATABLE: &[PropDoc] = &[
    PropDoc::new(
        "columns",
        "ColumnDef[]",
        "Array of column definitions. Each defines accessor, header, cell renderer, and sorting behavior.",
    ),
    PropDoc::new(
        "data",
        "T[]",
        "Array of data objects to display in the table. Type T matches your data structure.",
    ),
    PropDoc::new(
        "onRowClick",
        "(row: T) => void",
        "Callback when a row is clicked. Receives the row data object.",
    ),
    PropDoc::new(
        "sorting",
        "SortingState",
        "Current sorting state. Use with onSortingChange for controlled sorting.",
    ),
    PropDoc::new(
        "onSortingChange",
        "(sorting: SortingState) => void",
        "Callback when sorting changes. Used with @tanstack/react-table.",
    ),
    PropDoc::new(
        "filtering",
        "boolean",
        "Enable column filtering capabilities. Adds filter inputs to column headers.",
    ),
    PropDoc::new(
        "pagination",
        "boolean",
        "Enable pagination controls at the bottom of the table.",
    ),
];

const BREADCRUMBS: &[PropDoc] = &[
    PropDoc::new(
        "items",
        "BreadcrumbItem[]",
        "Array of breadcrumb items. Each has: { label: string, href?: string, current?: boolean }",
    ),
    PropDoc::new(
        "separator",
        "ReactNode",
        "Custom separator between breadcrumb items. Default is '/' or chevron icon.",
    ),
    PropDoc::new(
        "maxItems",
        "number",
        "Maximum items to show before collapsing. Middle items become '...' if exceeded.",
    ),
    PropDoc::new(
        "className",
        "string",
        "Additional CSS classes for the breadcrumb container.",
    ),
];

const TOGGLE: &[PropDoc] = &[
    PropDoc::new(
        "pressed",
        "boolean",
        "Controls the pressed/active state of the toggle button. True = active/pressed.",
    ),
    PropDoc::new(
        "onPressedChange",
        "(pressed: boolean) => void",
        "Callback when toggle state changes. Receives new pressed state.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables the toggle when true. Button appears grayed out and cannot be toggled.",
    ),
    PropDoc::new(
        "variant",
        "'default' | 'outline'",
        "Visual style: default (filled background when pressed) or outline (border style).",
    ),
    PropDoc::new(
        "size",
        "'default' | 'sm' | 'lg'",
        "Button size: default, small (sm), or large (lg).",
    ),
];

const TOGGLE_GROUP: &[PropDoc] = &[
    PropDoc::new(
        "type",
        "'single' | 'multiple'",
        "Selection mode: 'single' allows one selection only, 'multiple' allows multiple selections at once.",
    ),
    PropDoc::new(
        "value",
        "string | string[]",
        "Current selected value(s). String for single, array for multiple. Use with onValueChange.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: string | string[]) => void",
        "Callback when selection changes. Receives string or array depending on type.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables all toggle items in the group when true.",
    ),
    PropDoc::new(
        "variant",
        "'default' | 'outline'",
        "Visual style applied to all toggle items in the group.",
    ),
    PropDoc::new(
        "defaultValue",
        "string | string[]",
        "Initial value for uncontrolled toggle group. Type depends on single/multiple mode.",
    ),
];

const RESIZABLE: &[PropDoc] = &[
    PropDoc::new(
        "direction",
        "'horizontal' | 'vertical'",
        "Resize direction: horizontal (left-right) or vertical (top-bottom).",
    ),
    PropDoc::new(
        "defaultSize",
        "number",
        "Initial size of the resizable panel as a percentage (0-100) or pixels.",
    ),
    PropDoc::new(
        "minSize",
        "number",
        "Minimum allowed size. Prevents panel from being resized smaller than this value.",
    ),
    PropDoc::new(
        "maxSize",
        "number",
        "Maximum allowed size. Prevents panel from being resized larger than this value.",
    ),
    PropDoc::new(
        "onResize",
        "(size: number) => void",
        "Callback fired during resize. Receives current size in pixels or percentage.",
    ),
    PropDoc::new(
        "collapsible",
        "boolean",
        "Allows panel to collapse to minimum size or hidden. Useful for sidebar layouts.",
    ),
    PropDoc::new(
        "collapsedSize",
        "number",
        "Size when collapsed. Usually 0 to hide completely or small value to show icon bar.",
    ),
];

const COMBOBOX_CODE: &str = r#"import { Combobox } from "@/components/ui/combobox";

const [open, setOpen] = useState(false);
const [value, setValue] = useState("");

<Popover open={open} onOpenChange={setOpen}>
  <PopoverTrigger asChild>
    <Button variant="outline" role="combobox">
      {value || "Select framework..."}
      <ChevronsUpDown className="ml-2 h-4 w-4" />
    </Button>
  </PopoverTrigger>
  <PopoverContent className="w-[200px] p-0">
    <Command>
      <CommandInput placeholder="Search..." />
      <CommandEmpty>No results found.</CommandEmpty>
      <CommandGroup>
        {frameworks.map((framework) => (
          <CommandItem
            key={framework.value}
            onSelect={() => {
              setValue(framework.value);
              setOpen(false);
            }}
          >
            <Check className={value === framework.value ? "mr-2" : "mr-2 invisible"} />
            {framework.label}
          </CommandItem>
        ))}
      </CommandGroup>
    </Command>
  </PopoverContent>
</Popover>"#;

const DATATABLE_CODE: &str = r#"import { Table, TableBody, TableCell, TableHead, TableHeader, TableRow } from "@/components/ui/table";

const data = [
  { id: 1, name: "John", email: "john@example.com" },
  { id: 2, name: "Jane", email: "jane@example.com" },
];

<Table>
  <TableHeader>
    <TableRow>
      <TableHead>Name</TableHead>
      <TableHead>Email</TableHead>
    </TableRow>
  </TableHeader>
  <TableBody>
    {data.map((row) => (
      <TableRow key={row.id}>
        <TableCell>{row.name}</TableCell>
        <TableCell>{row.email}</TableCell>
      </TableRow>
    ))}
  </TableBody>
</Table>"#;

const BREADCRUMBS_CODE: &str = r#"import { Breadcrumb, BreadcrumbItem, BreadcrumbLink, BreadcrumbList, BreadcrumbPage, BreadcrumbSeparator } from "@/components/ui/breadcrumb";

<Breadcrumb>
  <BreadcrumbList>
    <BreadcrumbItem>
      <BreadcrumbLink href="/">Home</BreadcrumbLink>
    </BreadcrumbItem>
    <BreadcrumbSeparator />
    <BreadcrumbItem>
      <BreadcrumbLink href="/products">Products</BreadcrumbLink>
    </BreadcrumbItem>
    <BreadcrumbSeparator />
    <BreadcrumbItem>
      <BreadcrumbPage>Current Page</BreadcrumbPage>
    </BreadcrumbItem>
  </BreadcrumbList>
</Breadcrumb>"#;

const TOGGLE_CODE: &str = r#"import { Toggle } from "@/components/ui/toggle";
import { Bold } from "lucide-react";

const [pressed, setPressed] = useState(false);

<Toggle
  pressed={pressed}
  onPressedChange={setPressed}
  aria-label="Toggle bold"
>
  <Bold className="h-4 w-4" />
</Toggle>"#;

const TOGGLE_GROUP_CODE: &str = r#"import { ToggleGroup, ToggleGroupItem } from "@/components/ui/toggle-group";

const [value, setValue] = useState("left");

<ToggleGroup type="single" value={value} onValueChange={setValue}>
  <ToggleGroupItem value="left">
    <AlignLeft className="h-4 w-4" />
  </ToggleGroupItem>
  <ToggleGroupItem value="center">
    <AlignCenter className="h-4 w-4" />
  </ToggleGroupItem>
  <ToggleGroupItem value="right">
    <AlignRight className="h-4 w-4" />
  </ToggleGroupItem>
</ToggleGroup>"#;

const RESIZABLE_CODE: &str = r#"import { ResizableHandle, ResizablePanel, ResizablePanelGroup } from "@/components/ui/resizable";

<ResizablePanelGroup direction="horizontal">
  <ResizablePanel defaultSize={50}>
    <div>Panel 1</div>
  </ResizablePanel>
  <ResizableHandle />
  <ResizablePanel defaultSize={50}>
    <div>Panel 2</div>
  </ResizablePanel>
</ResizablePanelGroup>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("combobox", COMBOBOX_CODE, COMBOBOX)
        .entry("datatable", DATATABLE_CODE, DATATABLE)
        .entry("breadcrumbs", BREADCRUMBS_CODE, BREADCRUMBS)
        .entry("toggle", TOGGLE_CODE, TOGGLE)
        .entry("togglegroup", TOGGLE_GROUP_CODE, TOGGLE_GROUP)
        .entry("resizable", RESIZABLE_CODE, RESIZABLE)
        .build();

    Page {
        id: PageId::Fragments,
        title: "Fragments - Interactive Demo",
        subtitle: "Advanced UI components for complex interactions",
        panel_title: "Component Props",
        default_selection: "combobox",
        registry,
        cards: vec![
            ExampleCard::new(
                "breadcrumbs",
                "Breadcrumbs",
                "Home / Products / Electronics / Laptops",
                Preview::Breadcrumbs,
            ),
            ExampleCard::new(
                "combobox",
                "Combobox (Searchable Select)",
                "Use ←/→ to pick a framework, Space to clear",
                Preview::Combobox,
            ),
            ExampleCard::new(
                "toggle",
                "Toggle Buttons",
                "←/→ to focus, Space to press",
                Preview::Toggle,
            ),
            ExampleCard::new(
                "togglegroup",
                "Toggle Group",
                "Single choice text alignment",
                Preview::ToggleGroup,
            ),
            ExampleCard::new(
                "datatable",
                "Data Table with Search",
                "Press / to search by name or email",
                Preview::DataTable,
            ),
            ExampleCard::new(
                "resizable",
                "Resizable Panels",
                "Use ←/→ to drag the handle",
                Preview::Resizable,
            ),
        ],
    }
}
