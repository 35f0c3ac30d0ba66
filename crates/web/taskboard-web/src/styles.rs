//! Generated CSS classes.
//!
//! Elements also carry plain semantic class names (`task-card`,
//! `status-completed`, ...) so the page can be restyled from outside.

use dominator::{class, stylesheet};
use once_cell::sync::Lazy;

pub fn install_globals() {
    stylesheet!("body", {
        .style("margin", "0")
        .style("font-family", "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif")
        .style("background", "#f3f4f6")
        .style("color", "#1f2937")
    });

    stylesheet!("*", {
        .style("box-sizing", "border-box")
    });
}

pub static APP: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("min-height", "100vh")
    }
});

pub static SIDEBAR: Lazy<String> = Lazy::new(|| {
    class! {
        .style("width", "240px")
        .style("background", "#111827")
        .style("color", "#e5e7eb")
        .style("padding", "24px 16px")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "8px")
    }
});

pub static BRAND: Lazy<String> = Lazy::new(|| {
    class! {
        .style("font-size", "20px")
        .style("font-weight", "700")
        .style("margin-bottom", "24px")
    }
});

pub static NAV_LINK: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "10px")
        .style("padding", "10px 12px")
        .style("border-radius", "8px")
        .style("color", "inherit")
        .style("text-decoration", "none")
    }
});

pub static NAV_ACTIVE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#3b82f6")
        .style("color", "#fff")
    }
});

pub static MAIN: Lazy<String> = Lazy::new(|| {
    class! {
        .style("flex", "1")
        .style("padding", "24px 32px")
        .style("overflow-y", "auto")
    }
});

pub static HEADER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("align-items", "center")
        .style("margin-bottom", "24px")
    }
});

pub static HEADER_ACTIONS: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "12px")
    }
});

pub static BUTTON_PRIMARY: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#3b82f6")
        .style("color", "#fff")
        .style("border", "none")
        .style("border-radius", "6px")
        .style("padding", "8px 16px")
        .style("cursor", "pointer")
    }
});

pub static BUTTON_SECONDARY: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#e5e7eb")
        .style("color", "#1f2937")
        .style("border", "none")
        .style("border-radius", "6px")
        .style("padding", "8px 16px")
        .style("cursor", "pointer")
    }
});

pub static BUTTON_ICON: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "none")
        .style("border", "none")
        .style("color", "#6b7280")
        .style("cursor", "pointer")
        .style("padding", "4px 6px")
    }
});

pub static TOOLBAR: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("gap", "12px")
        .style("margin-bottom", "16px")
    }
});

pub static FILTER_BUTTON: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#fff")
        .style("border", "1px solid #d1d5db")
        .style("border-radius", "999px")
        .style("padding", "6px 14px")
        .style("margin-right", "6px")
        .style("cursor", "pointer")
    }
});

pub static FILTER_ACTIVE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#3b82f6")
        .style("border-color", "#3b82f6")
        .style("color", "#fff")
    }
});

pub static INPUT: Lazy<String> = Lazy::new(|| {
    class! {
        .style("width", "100%")
        .style("padding", "8px 10px")
        .style("border", "1px solid #d1d5db")
        .style("border-radius", "6px")
        .style("font", "inherit")
    }
});

pub static TASK_GRID: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "grid")
        .style("grid-template-columns", "repeat(auto-fill, minmax(280px, 1fr))")
        .style("gap", "16px")
    }
});

pub static CARD: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#fff")
        .style("border-radius", "10px")
        .style("padding", "16px")
        .style("box-shadow", "0 1px 3px rgba(0, 0, 0, 0.08)")
        .style("border-left", "4px solid #9ca3af")
    }
});

pub static CARD_HEADER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("align-items", "flex-start")
        .style("gap", "8px")
    }
});

pub static CARD_ROW: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("align-items", "center")
        .style("gap", "8px")
        .style("margin-top", "12px")
        .style("font-size", "13px")
        .style("color", "#6b7280")
    }
});

pub static BADGE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-flex")
        .style("align-items", "center")
        .style("gap", "4px")
        .style("border-radius", "999px")
        .style("padding", "2px 10px")
        .style("font-size", "12px")
        .style("font-weight", "600")
        .style("background", "#f3f4f6")
    }
});

pub static MUTED: Lazy<String> = Lazy::new(|| {
    class! {
        .style("color", "#9ca3af")
        .style("font-style", "italic")
    }
});

pub static PLACEHOLDER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("text-align", "center")
        .style("padding", "48px 16px")
        .style("color", "#6b7280")
    }
});

pub static FORM: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "16px")
        .style("max-width", "640px")
    }
});

pub static FORM_ROW: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "grid")
        .style("grid-template-columns", "1fr 1fr")
        .style("gap", "16px")
    }
});

pub static FORM_GROUP: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "6px")
    }
});

pub static FORM_ACTIONS: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "flex-end")
        .style("gap", "8px")
    }
});

pub static MODAL_BACKDROP: Lazy<String> = Lazy::new(|| {
    class! {
        .style("position", "fixed")
        .style("inset", "0")
        .style("background", "rgba(17, 24, 39, 0.5)")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("z-index", "50")
    }
});

pub static MODAL: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#fff")
        .style("border-radius", "12px")
        .style("padding", "24px")
        .style("width", "min(560px, 92vw)")
    }
});

pub static STAT_GRID: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "grid")
        .style("grid-template-columns", "repeat(4, 1fr)")
        .style("gap", "16px")
        .style("margin-bottom", "24px")
    }
});

pub static STAT_CARD: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#fff")
        .style("border-radius", "10px")
        .style("padding", "16px")
        .style("text-align", "center")
    }
});

pub static STAT_VALUE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("font-size", "28px")
        .style("font-weight", "700")
    }
});

pub static LEGEND: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "center")
        .style("gap", "16px")
        .style("margin-top", "12px")
    }
});

pub static SWATCH: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-block")
        .style("width", "12px")
        .style("height", "12px")
        .style("border-radius", "2px")
        .style("margin-right", "6px")
    }
});

pub static NOTIFICATION_STACK: Lazy<String> = Lazy::new(|| {
    class! {
        .style("position", "fixed")
        .style("top", "20px")
        .style("right", "20px")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "8px")
        .style("z-index", "100")
    }
});

pub static NOTIFICATION: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "8px")
        .style("padding", "12px 18px")
        .style("border-radius", "8px")
        .style("color", "#fff")
        .style("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)")
        .style("transform", "translateX(400px)")
        .style("transition", "transform 0.3s ease")
    }
});

pub static NOTIFICATION_SHOWN: Lazy<String> = Lazy::new(|| {
    class! {
        .style("transform", "translateX(0)")
    }
});

pub static PROFILE_ITEM: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("gap", "12px")
        .style("padding", "12px 0")
        .style("border-bottom", "1px solid #e5e7eb")
    }
});

pub fn priority_color(priority_class: &str) -> &'static str {
    match priority_class {
        "priority-high" => "#ef4444",
        "priority-low" => "#10b981",
        _ => "#f59e0b",
    }
}

pub fn notification_color(kind_class: &str) -> &'static str {
    match kind_class {
        "error" => "#ef4444",
        _ => "#10b981",
    }
}
