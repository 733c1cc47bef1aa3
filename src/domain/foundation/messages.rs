//! User-facing copy shared by the quiz, clipboard and loading flows.
//!
//! The article is published in Vietnamese; these strings are shown verbatim.

/// Blocking overlay text when the content document cannot be loaded.
pub const CONTENT_LOAD_FAILED: &str = "Không thể tải nội dung. Vui lòng tải lại trang.";

/// Shown when the quiz is submitted before every question is answered.
pub const QUIZ_INCOMPLETE: &str = "Vui lòng trả lời tất cả các câu hỏi!";

/// Shown when neither the primary nor the fallback clipboard accepted the text.
pub const COPY_FAILED: &str = "Không thể copy kết quả. Vui lòng thử lại.";

/// Copy button label at rest.
pub const COPY_LABEL: &str = "Copy kết quả";

/// Copy button label while the "copied" affordance is showing.
pub const COPIED_LABEL: &str = "Đã copy!";

/// Attribution line appended to exported quiz results.
pub const EXPORT_SOURCE: &str = "Nguồn: Từ \"Vibe Coder\" đến Kiến trúc sư AI";

/// Shown when an answer names a question the quiz does not contain.
pub const UNKNOWN_QUESTION: &str = "Câu hỏi không tồn tại trong bài đánh giá.";

/// Shown when an answer picks a score the question does not offer.
pub const SCORE_NOT_OFFERED: &str = "Lựa chọn không hợp lệ cho câu hỏi này.";

/// Shown when the content has no persona for the computed quadrant.
pub const PERSONA_MISSING: &str = "Không tìm thấy persona phù hợp cho kết quả này.";
