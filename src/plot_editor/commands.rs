use crate::controls::LineAction;

selector! { pub APPLY_LINE_ACTION: LineAction }
