//! Form controls page

use super::{ExampleCard, Page, PageId, Preview};
use crate::catalogue::{PropDoc, SnippetRegistry};

const INPUT: &[PropDoc] = &[
    PropDoc::new(
        "type",
        "string",
        "Defines the input type - 'text', 'email', 'password', 'number', 'tel', 'url', 'search'. \
         Controls keyboard on mobile and validation behavior.",
    ),
    PropDoc::new(
        "placeholder",
        "string",
        "Hint text displayed when input is empty. Disappears when user starts typing.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "When true, prevents user interaction and applies disabled styling. Field won't be \
         included in form submission.",
    ),
    PropDoc::new(
        "value",
        "string",
        "Controlled value of the input. Use with onChange for controlled components.",
    ),
    PropDoc::new(
        "onChange",
        "(e) => void",
        "Event handler called when input value changes. Use e.target.value to get the new value.",
    ),
];

const TEXTAREA: &[PropDoc] = &[
    PropDoc::new(
        "placeholder",
        "string",
        "Hint text shown when textarea is empty, useful for providing examples or format guidance.",
    ),
    PropDoc::new(
        "rows",
        "number",
        "Initial visible text rows. Default is usually 3-4. Textarea auto-expands if needed.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Prevents editing when true. Useful for read-only display or during form submission.",
    ),
    PropDoc::new(
        "maxLength",
        "number",
        "Maximum number of characters allowed. Useful for limiting text input like tweets or descriptions.",
    ),
];

const SELECT: &[PropDoc] = &[
    PropDoc::new(
        "value",
        "string",
        "Currently selected value. Must match one of the SelectItem values. Empty string for no selection.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: string) => void",
        "Callback fired when selection changes. Receives the new selected value as parameter.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables the entire select dropdown when true. User cannot open or change selection.",
    ),
    PropDoc::new(
        "defaultValue",
        "string",
        "Initial value for uncontrolled select. Use either defaultValue or value, not both.",
    ),
];

const RADIO: &[PropDoc] = &[
    PropDoc::new(
        "value",
        "string",
        "Currently selected radio option's value. Only one option can be selected at a time.",
    ),
    PropDoc::new(
        "onValueChange",
        "(value: string) => void",
        "Called when user selects a different radio option. Receives the new selected value.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables all radio options in the group. Individual RadioGroupItems can also be disabled separately.",
    ),
    PropDoc::new(
        "defaultValue",
        "string",
        "Initial selected value for uncontrolled radio group. Useful when you don't need to control state.",
    ),
];

const CHECKBOX: &[PropDoc] = &[
    PropDoc::new(
        "checked",
        "boolean | 'indeterminate'",
        "Controls checkbox state. True = checked, false = unchecked, 'indeterminate' = partial \
         state (useful for 'select all' scenarios).",
    ),
    PropDoc::new(
        "onCheckedChange",
        "(checked: boolean) => void",
        "Callback when checkbox is toggled. Receives new checked state as boolean.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Prevents interaction when true. Checkbox appears grayed out and cannot be toggled.",
    ),
    PropDoc::new(
        "required",
        "boolean",
        "Marks checkbox as required in forms. Useful for terms acceptance or required consent checkboxes.",
    ),
];

const SWITCH: &[PropDoc] = &[
    PropDoc::new(
        "checked",
        "boolean",
        "Controls the switch state. True = ON (right), false = OFF (left). Use for binary settings.",
    ),
    PropDoc::new(
        "onCheckedChange",
        "(checked: boolean) => void",
        "Callback when switch is toggled. Receives new boolean state immediately.",
    ),
    PropDoc::new(
        "disabled",
        "boolean",
        "Disables the switch when true. Useful during loading states or when feature is unavailable.",
    ),
    PropDoc::new(
        "id",
        "string",
        "HTML id attribute. Connect to a label using htmlFor for better accessibility.",
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
        "Date | Date[] | {from: Date, to: Date}",
        "Selected date(s). Type depends on mode: Date for single, Date[] for multiple, object for range.",
    ),
    PropDoc::new(
        "onSelect",
        "(date) => void",
        "Called when user selects date(s). Parameter type matches the mode: Date, Date[], or range object.",
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
        "Earliest selectable date. Dates before this are disabled. Useful for future-only date selection.",
    ),
    PropDoc::new(
        "toDate",
        "Date",
        "Latest selectable date. Dates after this are disabled. Useful for limiting date range.",
    ),
];

const INPUT_CODE: &str = r#"<Controller
  control={form.control}
  name="email"
  render={({ field }) => (
    <div>
      <label>Email</label>
      <Input
        {...field}
        type="email"
        placeholder="you@example.com"
      />
    </div>
  )}
/>"#;

const TEXTAREA_CODE: &str = r#"<Controller
  control={form.control}
  name="message"
  render={({ field }) => (
    <div>
      <label>Message</label>
      <Textarea
        {...field}
        placeholder="Type here..."
        rows={4}
      />
    </div>
  )}
/>"#;

const CHECKBOX_CODE: &str = r#"<Controller
  control={form.control}
  name="checkbox"
  render={({ field }) => (
    <div className="flex items-center gap-2">
      <Checkbox
        checked={field.value}
        onCheckedChange={field.onChange}
      />
      <label>Accept Terms</label>
    </div>
  )}
/>"#;

const SWITCH_CODE: &str = r#"<Controller
  control={form.control}
  name="switch"
  render={({ field }) => (
    <div className="flex items-center justify-between">
      <label>Enable Notifications</label>
      <Switch
        checked={field.value}
        onCheckedChange={field.onChange}
      />
    </div>
  )}
/>"#;

const RADIO_CODE: &str = r#"<Controller
  control={form.control}
  name="radio"
  render={({ field }) => (
    <div>
      <label>Choose Option</label>
      <RadioGroup
        value={field.value}
        onValueChange={field.onChange}
      >
        <div className="flex items-center gap-2">
          <RadioGroupItem value="opt1" id="opt1" />
          <label htmlFor="opt1">Option 1</label>
        </div>
        <div className="flex items-center gap-2">
          <RadioGroupItem value="opt2" id="opt2" />
          <label htmlFor="opt2">Option 2</label>
        </div>
      </RadioGroup>
    </div>
  )}
/>"#;

const SELECT_CODE: &str = r#"<Controller
  control={form.control}
  name="select"
  render={({ field }) => (
    <div>
      <label>Select Option</label>
      <Select
        value={field.value}
        onValueChange={field.onChange}
      >
        <SelectTrigger>
          <SelectValue placeholder="Choose..." />
        </SelectTrigger>
        <SelectContent>
          <SelectItem value="1">Option 1</SelectItem>
          <SelectItem value="2">Option 2</SelectItem>
          <SelectItem value="3">Option 3</SelectItem>
        </SelectContent>
      </Select>
    </div>
  )}
/>"#;

const CALENDAR_CODE: &str = r#"<Controller
  control={form.control}
  name="calendar"
  render={({ field }) => (
    <div>
      <label>Select Date</label>
      <Calendar
        mode="single"
        selected={field.value}
        onSelect={field.onChange}
      />
    </div>
  )}
/>"#;

pub(super) fn page() -> Page {
    let registry = SnippetRegistry::builder()
        .entry("Input", INPUT_CODE, INPUT)
        .entry("Textarea", TEXTAREA_CODE, TEXTAREA)
        .entry("Select", SELECT_CODE, SELECT)
        .entry("Radio", RADIO_CODE, RADIO)
        .entry("Checkbox", CHECKBOX_CODE, CHECKBOX)
        .entry("Switch", SWITCH_CODE, SWITCH)
        .entry("Calendar", CALENDAR_CODE, CALENDAR)
        .build();

    Page {
        id: PageId::Form,
        title: "Form Components Demo",
        subtitle: "Inputs, selects, toggles and date pickers",
        panel_title: "Component Props",
        default_selection: "Input",
        registry,
        cards: vec![
            ExampleCard::new("Input", "Email", "you@example.com", Preview::Input),
            ExampleCard::new(
                "Textarea",
                "Message",
                "Type your message here...",
                Preview::Textarea,
            ),
            ExampleCard::new(
                "Checkbox",
                "Accept Terms",
                "Press Space to toggle",
                Preview::Checkbox,
            ),
            ExampleCard::new(
                "Switch",
                "Enable Notifications",
                "Press Space to toggle",
                Preview::Switch,
            ),
            ExampleCard::new(
                "Radio",
                "Choose Option",
                "Use ←/→ to pick an option",
                Preview::Radio,
            ),
            ExampleCard::new(
                "Select",
                "Country",
                "Use ←/→ to choose a country",
                Preview::Select,
            ),
            ExampleCard::new(
                "Calendar",
                "Select Date",
                "Today's month, with today highlighted",
                Preview::Calendar,
            ),
        ],
    }
}
