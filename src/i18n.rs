//! Localized display strings.
//!
//! Every string the booking flow shows is a [`MessageKey`]; each key has an
//! English and an Arabic text, enforced by an exhaustive `match`. Placeholders
//! use `{name}` syntax and are filled by [`MessageKey::render`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Lang::Ar)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    StepSelectService,
    StepPickDateTime,
    StepYourDetails,
    StepConfirm,
    ConsultationLabel,
    GroupTherapyLabel,
    DayProgramLabel,
    SelectServicePrompt,
    YouAreBooking,
    LabelService,
    LabelDate,
    LabelTime,
    LabelName,
    LabelEmail,
    LabelPhone,
    LabelNotes,
    ButtonBack,
    ButtonContinue,
    ButtonConfirm,
    Processing,
    CancellationNotice,
    BookingConfirmed,
    ThankYou,
    ConfirmationSentTo,
    BookAnother,
    SubmissionFailed,
    TryAgain,
    ContactReceived,
    CallbackRequested,
}

impl MessageKey {
    pub const ALL: [MessageKey; 29] = [
        MessageKey::StepSelectService,
        MessageKey::StepPickDateTime,
        MessageKey::StepYourDetails,
        MessageKey::StepConfirm,
        MessageKey::ConsultationLabel,
        MessageKey::GroupTherapyLabel,
        MessageKey::DayProgramLabel,
        MessageKey::SelectServicePrompt,
        MessageKey::YouAreBooking,
        MessageKey::LabelService,
        MessageKey::LabelDate,
        MessageKey::LabelTime,
        MessageKey::LabelName,
        MessageKey::LabelEmail,
        MessageKey::LabelPhone,
        MessageKey::LabelNotes,
        MessageKey::ButtonBack,
        MessageKey::ButtonContinue,
        MessageKey::ButtonConfirm,
        MessageKey::Processing,
        MessageKey::CancellationNotice,
        MessageKey::BookingConfirmed,
        MessageKey::ThankYou,
        MessageKey::ConfirmationSentTo,
        MessageKey::BookAnother,
        MessageKey::SubmissionFailed,
        MessageKey::TryAgain,
        MessageKey::ContactReceived,
        MessageKey::CallbackRequested,
    ];

    pub fn text(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.english(),
            Lang::Ar => self.arabic(),
        }
    }

    /// Fills `{placeholder}` occurrences from `vars`. Unknown placeholders
    /// are left as written.
    pub fn render(&self, lang: Lang, vars: &[(&str, &str)]) -> String {
        let mut out = self.text(lang).to_string();
        for (name, value) in vars {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    fn english(&self) -> &'static str {
        match self {
            MessageKey::StepSelectService => "Select Service",
            MessageKey::StepPickDateTime => "Pick Date & Time",
            MessageKey::StepYourDetails => "Your Details",
            MessageKey::StepConfirm => "Confirm",
            MessageKey::ConsultationLabel => "Book a Consultant",
            MessageKey::GroupTherapyLabel => "Book Group Therapy",
            MessageKey::DayProgramLabel => "Day Care Program",
            MessageKey::SelectServicePrompt => "Select {label}",
            MessageKey::YouAreBooking => "You are booking: {label}",
            MessageKey::LabelService => "Service",
            MessageKey::LabelDate => "Date",
            MessageKey::LabelTime => "Time",
            MessageKey::LabelName => "Name",
            MessageKey::LabelEmail => "Email",
            MessageKey::LabelPhone => "Phone",
            MessageKey::LabelNotes => "Notes",
            MessageKey::ButtonBack => "Back",
            MessageKey::ButtonContinue => "Continue",
            MessageKey::ButtonConfirm => "Confirm Booking",
            MessageKey::Processing => "Processing...",
            MessageKey::CancellationNotice => {
                "By confirming, you agree to our cancellation policy. A team member will contact you to finalize details."
            }
            MessageKey::BookingConfirmed => "Booking Confirmed!",
            MessageKey::ThankYou => "Thank you, {name}. Your appointment has been received.",
            MessageKey::ConfirmationSentTo => {
                "A confirmation will be sent to {email}. We'll contact you to finalize details."
            }
            MessageKey::BookAnother => "Book Another Appointment",
            MessageKey::SubmissionFailed => {
                "We couldn't submit your booking. Your details are saved, please try again."
            }
            MessageKey::TryAgain => "Try Again",
            MessageKey::ContactReceived => {
                "Thank you, {name}. Your message has been received and our team will get back to you shortly."
            }
            MessageKey::CallbackRequested => "Thank you! We'll call you back about {event}.",
        }
    }

    fn arabic(&self) -> &'static str {
        match self {
            MessageKey::StepSelectService => "اختر الخدمة",
            MessageKey::StepPickDateTime => "اختر التاريخ والوقت",
            MessageKey::StepYourDetails => "بياناتك",
            MessageKey::StepConfirm => "تأكيد",
            MessageKey::ConsultationLabel => "احجز استشاريًا",
            MessageKey::GroupTherapyLabel => "احجز العلاج الجماعي",
            MessageKey::DayProgramLabel => "برنامج الرعاية النهارية",
            MessageKey::SelectServicePrompt => "اختر {label}",
            MessageKey::YouAreBooking => "أنت تحجز: {label}",
            MessageKey::LabelService => "الخدمة",
            MessageKey::LabelDate => "التاريخ",
            MessageKey::LabelTime => "الوقت",
            MessageKey::LabelName => "الاسم",
            MessageKey::LabelEmail => "البريد الإلكتروني",
            MessageKey::LabelPhone => "الهاتف",
            MessageKey::LabelNotes => "ملاحظات",
            MessageKey::ButtonBack => "رجوع",
            MessageKey::ButtonContinue => "متابعة",
            MessageKey::ButtonConfirm => "تأكيد الحجز",
            MessageKey::Processing => "جارٍ المعالجة...",
            MessageKey::CancellationNotice => {
                "بتأكيد الحجز، فإنك توافق على سياسة الإلغاء لدينا. سيتواصل معك أحد أعضاء الفريق لإتمام التفاصيل."
            }
            MessageKey::BookingConfirmed => "تم تأكيد الحجز!",
            MessageKey::ThankYou => "شكرًا لك، {name}. تم استلام موعدك.",
            MessageKey::ConfirmationSentTo => {
                "سيتم إرسال تأكيد إلى {email}. سنتواصل معك لإتمام التفاصيل."
            }
            MessageKey::BookAnother => "احجز موعدًا آخر",
            MessageKey::SubmissionFailed => {
                "تعذر إرسال حجزك. تم حفظ بياناتك، يرجى المحاولة مرة أخرى."
            }
            MessageKey::TryAgain => "حاول مرة أخرى",
            MessageKey::ContactReceived => {
                "شكرًا لك، {name}. تم استلام رسالتك وسيتواصل معك فريقنا قريبًا."
            }
            MessageKey::CallbackRequested => "شكرًا لك! سنعاود الاتصال بك بخصوص {event}.",
        }
    }
}
