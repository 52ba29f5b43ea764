//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so components never name
//! an icon set directly.

use icondata::Icon;

pub const SORT_ASC: Icon = icondata::BsCaretUpFill;
pub const SORT_DESC: Icon = icondata::BsCaretDownFill;
pub const FILTER: Icon = icondata::BsFunnel;
pub const TRASH: Icon = icondata::BsTrash;
pub const NEXT_PAGE: Icon = icondata::BsChevronRight;
pub const DOWNLOAD: Icon = icondata::BsDownload;
