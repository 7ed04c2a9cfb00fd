//! Localized user-facing status messages (Arabic).
//!
//! Message text is presentation only; clients branch on the `code`,
//! `found` and `supportsEsim` fields, never on these strings.

/// 400 — search submitted with an empty query.
pub const EMPTY_QUERY: &str = "يرجى إدخال اسم الجهاز للبحث";

/// 400 — eSIM check submitted without a query or device id.
pub const MISSING_LOOKUP: &str = "يرجى تحديد اسم الجهاز أو معرّفه";

/// 429 — rejected by the local spacing throttle.
pub const LOCAL_THROTTLE: &str = "الرجاء الانتظار بضع ثوانٍ قبل إرسال طلب جديد";

/// 429 — rejected while the upstream cooldown window is active.
pub const UPSTREAM_BLOCKED: &str = "مصدر البيانات يرفض الطلبات حالياً، يرجى المحاولة لاحقاً";

/// 429 — the catalog itself answered with a rate limit.
pub const UPSTREAM_RATE_LIMITED: &str = "تم تجاوز حد الطلبات المسموح به، يرجى المحاولة بعد قليل";

/// 500 — any other upstream or internal failure.
pub const UPSTREAM_FAILURE: &str = "حدث خطأ أثناء جلب بيانات الجهاز";

/// Answer — no device matched the lookup.
pub const DEVICE_NOT_FOUND: &str = "لم يتم العثور على جهاز مطابق";

/// Answer — the spec sheet carried no SIM entry.
pub const SIM_UNDETERMINED: &str = "تعذّر تحديد دعم eSIM لهذا الجهاز";

/// Answer — the SIM entry mentions eSIM.
pub const SUPPORTS_ESIM: &str = "هذا الجهاز يدعم eSIM";

/// Answer — SIM data found, but nothing points at eSIM support.
pub const NO_ESIM_EVIDENCE: &str = "لا يوجد ما يدل على أن هذا الجهاز يدعم eSIM";
