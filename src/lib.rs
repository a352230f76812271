pub mod configuration;
pub mod error;

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod emiliani;
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod colombiancalendar;
    }
}
