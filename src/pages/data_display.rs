//! Data display page: cards, tables, tabs, charts, pagination and friends
//!
//! `calendar` is documented but has no snippet.

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

/// Monthly values plotted by the chart preview
pub const CHART_DATA: &[(&str, u64)] = &[
    ("Jan", 40),
    ("Feb", 55),
    ("Mar", 30),
    ("Apr", 70),
    ("May", 60),
];

const CARDS: &[PropDoc] = &[
    PropDoc::new(
        "className",
        "string",
        "Additional CSS classes for styling the card container.",
    ),
    PropDoc::new("children", "ReactNode", "Content to be rendered inside the card."),
];

const TABLE: &[PropDoc] = &[
    PropDoc::new("className", "string", "Additional CSS classes for the table element."),
    PropDoc::new(
        "children",
        "ReactNode",
        "TableHeader, TableBody, and TableFooter components containing table structure.",
    ),
];

const TABS: &[PropDoc] = &[
    PropDoc::new(
        "defaultValue",
        "string",
        "The value of the tab that should be active by default. Must match one of the TabsTrigger values.",
    ),
    PropDoc::new(
        "value",
        "string",
        "Controlled value of the active tab. Use with onValueChange for controlled tabs.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: string) => void",
        "Callback when the active tab changes. Receives the new tab value.",
    ),
    PropDoc::new(
        "orientation",
        "'horizontal' | 'vertical'",
        "Layout orientation of tabs. Horizontal displays tabs in a row, vertical in a column.",
    ),
];

const BADGES: &[PropDoc] = &[
    PropDoc::new(
        "variant",
        "'default' | 'secondary' | 'destructive' | 'outline'",
        "Visual style variant: default (primary color), secondary (muted), destructive \
         (red/danger), outline (border only).",
    ),
    PropDoc::new(
        "className",
        "string",
        "Additional CSS classes to customize badge appearance.",
    ),
    PropDoc::new(
        "children",
        "ReactNode",
        "Text or content displayed inside the badge.",
    ),
];

const PROGRESS: &[PropDoc] = &[
    PropDoc::new(
        "value",
        "number",
        "Current progress value between 0 and max. Controls the fill percentage of the progress bar.",
    ),
    PropDoc::new(
        "max",
        "number",
        "Maximum value for the progress bar. Default is 100. Progress is calculated as (value/max) * 100%.",
    ),
    PropDoc::new(
        "className",
        "string",
        "Additional CSS classes for styling the progress bar container.",
    ),
];

const SLIDER: &[PropDoc] = &[
    PropDoc::new(
        "defaultValue",
        "number[]",
        "Initial value(s) for uncontrolled slider. Array with one number for single thumb, two \
         for range slider.",
    ),
    PropDoc::new(
        "value",
        "number[]",
        "Controlled value(s) of the slider. Use with onValueChange for controlled slider.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: number[]) => void",
        "Callback fired when slider value changes. Receives array with current value(s).",
    ),
    PropDoc::new("min", "number", "Minimum value of the slider range. Default is 0."),
    PropDoc::new("max", "number", "Maximum value of the slider range. Default is 100."),
    PropDoc::new(
        "step",
        "number",
        "Increment step size when moving the slider. Default is 1. Set to 0.1 for decimal values.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables slider interaction when true. Slider appears grayed out.",
    ),
];

const CAROUSEL: &[PropDoc] = &[
    PropDoc::new(
        "orientation",
        "'horizontal' | 'vertical'",
        "Scroll direction of carousel. Horizontal slides left-right, vertical slides up-down.",
    ),
    PropDoc::new(
        "opts",
        "object",
        "Embla carousel options like loop (infinite scroll), align (start/center/end), skipSnaps, etc.",
    ),
    PropDoc::new(
        "plugins",
        "array",
        "Embla plugins for autoplay, fade effects, and other advanced features.",
    ),
    PropDoc::new(
        "setApi",
        "(api) => void",
        "Callback to access the Embla API for programmatic control (scrollTo, play, pause, etc).",
    ),
];

const SKELETON: &[PropDoc] = &[
    PropDoc::new(
        "className",
        "string",
        "CSS classes to control skeleton dimensions and styling. Common: 'h-4 w-full', \
         'h-20 w-20 rounded-full'.",
    ),
    PropDoc::new(
        "children",
        "ReactNode",
        "Optional content. Usually skeletons are self-closing but can wrap content for shimmer effects.",
    ),
];

const STATS: &[PropDoc] = &[PropDoc::new(
    "N/A",
    "N/A",
    "Stats cards are typically composed of Card, CardHeader, CardTitle, and CardContent \
     components with custom metrics displayed inside.",
)];

const CHARTS: &[PropDoc] = &[
    PropDoc::new(
        "data",
        "array",
        "Array of data objects for the chart. Each object should have keys matching the dataKey \
         props of chart elements.",
    ),
    PropDoc::new(
        "width",
        "number | string",
        "Chart width. Use ResponsiveContainer for responsive charts that adapt to parent width.",
    ),
    PropDoc::new(
        "height",
        "number | string",
        "Chart height in pixels or percentage. Required for charts to render properly.",
    ),
    PropDoc::new(
        "margin",
        "object",
        "Spacing around chart: { top: 5, right: 30, left: 20, bottom: 5 }. Prevents labels from \
         being cut off.",
    ),
];

const CALENDAR: &[PropDoc] = &[
    PropDoc::new(
        "mode",
        "'single' | 'multiple' | 'range'",
        "Selection mode: 'single' for one date, 'multiple' for several dates, 'range' for \
         start/end date selection.",
    ),
    PropDoc::new(
        "selected",
        "Date | Date[] | DateRange",
        "Selected date(s). Type depends on mode: Date for single, Date[] for multiple, \
         {from: Date, to: Date} for range.",
    ),
    PropDoc::new(
        "onSelect",
        "(date) => void",
        "Called when user selects date(s). Parameter type matches the mode.",
    ),
    PropDoc::new(
        "disabled",
        "Date[] | (date: Date) => boolean",
        "Array of disabled dates or function returning true for disabled dates. Useful for \
         blocking past dates or specific days.",
    ),
    PropDoc::new(
        "fromDate",
        "Date",
        "Earliest selectable date. Dates before this are disabled.",
    ),
    PropDoc::new(
        "toDate",
        "Date",
        "Latest selectable date. Dates after this are disabled.",
    ),
];

const PAGINATION: &[PropDoc] = &[
    PropDoc::new(
        "currentPage",
        "number",
        "Currently active page number. Usually starts at 1.",
    ),
    PropDoc::new("totalPages", "number", "Total number of pages available."),
    PropDoc::new(
        "onPageChange",
        "(page: number) => void",
        "Callback when user navigates to a different page. Receives new page number.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables pagination controls when true. Useful during loading states.",
    ),
];

const CARDS_CODE: &str = r#"<Card>
<CardHeader>
  <CardTitle>Title</CardTitle>
</CardHeader>
<CardContent>
  Card body content
</CardContent>
</Card>"#;

const TABLE_CODE: &str = r#"<Table>
<TableHeader>
  <TableRow>
    <TableHead>Name</TableHead>
    <TableHead>Email</TableHead>
  </TableRow>
</TableHeader>
<TableBody>
  <TableRow>
    <TableCell>John</TableCell>
    <TableCell>john@mail.com</TableCell>
  </TableRow>
</TableBody>
</Table>"#;

const TABS_CODE: &str = r#"<Tabs defaultValue="one">
<TabsList>
  <TabsTrigger value="one">One</TabsTrigger>
  <TabsTrigger value="two">Two</TabsTrigger>
</TabsList>
<TabsContent value="one">
  Content for tab one
</TabsContent>
<TabsContent value="two">
  Content for tab two
</TabsContent>
</Tabs>"#;

const BADGES_CODE: &str = r#"<Badge>New</Badge>
<Badge variant="secondary">Beta</Badge>
<Badge variant="destructive">Error</Badge>
<Badge variant="outline">Draft</Badge>"#;

const PROGRESS_CODE: &str = r#"<Progress value={60} max={100} />"#;

const SLIDER_CODE: &str = r#"const [value, setValue] = useState([50]);

<Slider
value={value}
onValueChange={setValue}
max={100}
step={1}
/>
<p>Value: {value[0]}</p>"#;

const CAROUSEL_CODE: &str = r#"<Carousel>
<CarouselContent>
  {items.map((item, i) => (
    <CarouselItem key={i}>
      <Card>{item}</Card>
    </CarouselItem>
  ))}
</CarouselContent>
<CarouselPrevious />
<CarouselNext />
</Carousel>"#;

const SKELETON_CODE: &str = r#"<Skeleton className="h-6 w-1/2" />
<Skeleton className="h-4 w-1/3" />
<Skeleton className="h-24 w-full" />"#;

const STATS_CODE: &str = r#"<Card>
<CardHeader>
  <CardTitle>Total Sales</CardTitle>
</CardHeader>
<CardContent>
  <p className="text-3xl font-bold">$12,400</p>
  <Badge>+12%</Badge>
</CardContent>
</Card>"#;

const CHARTS_CODE: &str = r##"import { LineChart, Line, XAxis, YAxis } from "recharts";

<ResponsiveContainer width="100%" height={300}>
<LineChart data={data}>
  <CartesianGrid strokeDasharray="3 3" />
  <XAxis dataKey="name" />
  <YAxis />
  <Tooltip />
  <Line type="monotone" dataKey="value" stroke="#7c3aed" />
</LineChart>
</ResponsiveContainer>"##;

const PAGINATION_CODE: &str = r#"const [page, setPage] = useState(1);
const totalPages = 10;

<div className="flex items-center gap-4">
<Button
  onClick={() => setPage(p => Math.max(1, p - 1))}
  disabled={page === 1}
>
  Previous
</Button>
<span>Page {page} of {totalPages}</span>
<Button
  onClick={() => setPage(p => Math.min(totalPages, p + 1))}
  disabled={page === totalPages}
>
  Next
</Button>
</div>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("cards", CARDS_CODE, CARDS)
        .entry("table", TABLE_CODE, TABLE)
        .entry("tabs", TABS_CODE, TABS)
        .entry("badges", BADGES_CODE, BADGES)
        .entry("progress", PROGRESS_CODE, PROGRESS)
        .entry("slider", SLIDER_CODE, SLIDER)
        .entry("carousel", CAROUSEL_CODE, CAROUSEL)
        .entry("skeleton", SKELETON_CODE, SKELETON)
        .entry("stats", STATS_CODE, STATS)
        .entry("charts", CHARTS_CODE, CHARTS)
        .props_only("calendar", CALENDAR)
        .entry("pagination", PAGINATION_CODE, PAGINATION)
        .build();

    Page {
        id: PageId::DataDisplay,
        title: "Data Display - Interactive Demo",
        subtitle: "Tables, cards, carousels",
        panel_title: "Component Props",
        default_selection: "cards",
        registry,
        cards: vec![
            ExampleCard::new("cards", "Total Sales", "$12,400  +12% this month", Preview::Cards),
            ExampleCard::new("stats", "Active Users", "8,930", Preview::Stats),
            ExampleCard::new("table", "Table", "Name, email and status", Preview::Table),
            ExampleCard::new("tabs", "Tabs", "Use ←/→ to switch tabs", Preview::Tabs),
            ExampleCard::new(
                "carousel",
                "Carousel",
                "Use ←/→ to scroll slides",
                Preview::Carousel,
            ),
            ExampleCard::new(
                "slider",
                "Slider",
                "Use ←/→ to move in steps of 5",
                Preview::Slider,
            ),
            ExampleCard::new(
                "progress",
                "Progress",
                "Use ←/→ to change the value",
                Preview::Progress,
            ),
            ExampleCard::new("charts", "Charts", "Monthly values", Preview::Chart),
            ExampleCard::new(
                "pagination",
                "Pagination",
                "Use ←/→ to change page",
                Preview::Pagination,
            ),
            ExampleCard::new(
                "calendar",
                "Calendar",
                "Date picker documentation",
                Preview::Calendar,
            ),
            ExampleCard::new(
                "skeleton",
                "Skeletons (Loading States)",
                "Placeholders while content loads",
                Preview::Skeleton,
            ),
            ExampleCard::new("badges", "Badges", "New, Beta, Error, Draft", Preview::Badges),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::NO_EXAMPLE;

    #[test]
    fn calendar_is_documented_without_snippet() {
        let page = page();
        assert!(page.registry.contains("calendar"));
        assert!(page.registry.get("calendar").is_none());
        assert_eq!(page.registry.snippet_or_placeholder("calendar"), NO_EXAMPLE);
        assert_eq!(page.registry.props("calendar").len(), 6);
    }

    #[test]
    fn chip_order_follows_registration() {
        let ids: Vec<_> = page().registry.ids().collect();
        assert_eq!(ids.first(), Some(&"cards"));
        assert_eq!(ids.last(), Some(&"pagination"));
        assert_eq!(ids.len(), 12);
    }
}
