use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled on first use and shared for the lifetime of the program.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    compiled: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            compiled: OnceLock::new(),
            source,
        }
    }

    /// Panics if the selector literal is not valid CSS.
    pub(crate) fn get(&self) -> &Selector {
        self.compiled.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("invalid static selector {:?}: {e:?}", self.source))
        })
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

#[macro_export]
macro_rules! static_selector {
    ($($x: ident <- $sel: literal);+ $(;)?) => {
        $(
            static $x: $crate::parse::static_selector::StaticSelector =
                $crate::parse::static_selector::StaticSelector::new($sel);
        )+
    };
}
