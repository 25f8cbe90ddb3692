/// Where in the storefront the guide widget was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideRoute {
    /// A single model's detail page.
    Detail,
    /// The catalog listing.
    Listing,
    /// The comparison page.
    Compare,
    /// Anywhere else.
    Other,
}

impl GuideRoute {
    /// Decodes a storefront path. Detail pages win over the listing check
    /// because their paths nest under it.
    pub fn from_path(path: &str) -> Self {
        if path.contains("/models/") {
            GuideRoute::Detail
        } else if path.contains("/models") {
            GuideRoute::Listing
        } else if path == "/compare" {
            GuideRoute::Compare
        } else {
            GuideRoute::Other
        }
    }

    /// The opening line the widget seeds its transcript with.
    pub fn greeting(&self) -> &'static str {
        match self {
            GuideRoute::Detail => "Curious about this hot tub's features or best uses?",
            GuideRoute::Listing => "Looking for something with 5 seats or more?",
            GuideRoute::Compare => {
                "Would you like me to highlight key differences between these hot tubs?"
            }
            GuideRoute::Other => "Hi there! How can I help you choose your perfect hot tub?",
        }
    }
}

impl std::fmt::Display for GuideRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuideRoute::Detail => write!(f, "detail"),
            GuideRoute::Listing => write!(f, "listing"),
            GuideRoute::Compare => write!(f, "compare"),
            GuideRoute::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for GuideRoute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detail" => Ok(GuideRoute::Detail),
            "listing" => Ok(GuideRoute::Listing),
            "compare" => Ok(GuideRoute::Compare),
            "other" => Ok(GuideRoute::Other),
            _ => Err(format!("Invalid guide route: {}", s)),
        }
    }
}
