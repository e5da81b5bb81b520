pub mod configuration;

pub mod cache {
    pub mod yearcache;
}

pub mod catalog {
    pub mod resolver;
    pub mod holidaycatalog;
}

pub mod error {
    pub mod holidayerror;
}

pub mod holiday {
    pub mod holidayentry;
    pub mod defaultdayrule;
}

pub mod scrape {
    pub mod fetcher;
    pub mod rowextractor;
    pub mod holidaypage;
}

pub mod time {
    pub mod utility;
    pub mod localenames;
    pub mod rangeofdates;

    pub mod calendar {
        pub mod holidaycalendar;
    }
}
