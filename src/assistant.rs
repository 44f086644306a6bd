// Canned-response assistant: keyword lookup, transcript, and deferred replies.
// Replies are issued as tickets; a ticket is only honored while its session is open.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reply bucket selected by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    SocialDesign,
    Identity,
    Video,
    Help,
    Colors,
    Fallback,
}

/// Keyword sets in priority order. The first category with a hit wins.
const KEYWORDS: [(ReplyCategory, &[&str]); 5] = [
    (ReplyCategory::SocialDesign, &["سوشيال ميديا", "تصميم", "منشور"]),
    (ReplyCategory::Identity, &["شعار", "لوجو", "هوية"]),
    (ReplyCategory::Video, &["فيديو", "ريلز", "animation"]),
    (ReplyCategory::Help, &["مساعدة", "help", "كيف"]),
    (ReplyCategory::Colors, &["ألوان", "colors"]),
];

const SOCIAL_DESIGN_REPLY: &str = "يمكنني مساعدتك في تصميم منشورات سوشيال ميديا احترافية! انتقل إلى تبويب \"تصميمات سوشيال ميديا\" لإنشاء تصميمات جذابة لـ Instagram, Facebook, Twitter والمزيد. يمكنك اختيار القالب والألوان والمحتوى حسب رغبتك.";

const IDENTITY_REPLY: &str = "سأساعدك في إنشاء شعار وهوية بصرية كاملة لعلامتك التجارية! اذهب إلى تبويب \"شعارات وهوية بصرية\" حيث يمكنك تصميم شعار فريد مع بطاقات الأعمال، الأوراق الرسمية، وكل ما تحتاجه لهوية متكاملة.";

const VIDEO_REPLY: &str = "أستطيع مساعدتك في إنشاء فيديوهات ترويجية وريلز احترافية! توجه إلى تبويب \"الفيديوهات\" لإنشاء محتوى فيديو متحرك وجذاب لقنواتك على YouTube, Instagram Reels, TikTok وغيرها.";

const HELP_REPLY: &str = "مرحباً بك! أنا Creative AI Agent، مساعدك الذكي للتصميم. يمكنني مساعدتك في:

📱 تصميمات سوشيال ميديا احترافية (Instagram, Facebook, Twitter)
🎨 شعارات وهوية بصرية كاملة (Logo, Business Cards, Letterheads)
🎬 فيديوهات ترويجية وريلز (YouTube, Reels, TikTok)

استخدم التبويبات في الأعلى للوصول إلى الأدوات، أو أخبرني بما تحتاجه وسأرشدك!";

const COLORS_REPLY: &str = "الألوان مهمة جداً في التصميم! أنصحك باختيار:\n\n🔵 الأزرق: للثقة والاحترافية\n🔴 الأحمر: للطاقة والشغف\n🟢 الأخضر: للنمو والصحة\n🟣 البنفسجي: للإبداع والفخامة\n🟡 الأصفر: للسعادة والتفاؤل\n\nيمكنك تجربة مجموعات ألوان مختلفة في أي من أدوات التصميم المتاحة!";

const FALLBACK_REPLY: &str = "شكراً لتواصلك! أنا هنا لمساعدتك في جميع احتياجاتك الإبداعية. يمكنني:

✨ تصميم منشورات سوشيال ميديا جذابة
✨ إنشاء شعارات وهوية بصرية متكاملة
✨ تصميم فيديوهات ترويجية وريلز

اختر أي تبويب من الأعلى لبدء الإنشاء، أو اسألني عن أي استفسار تصميمي!";

impl ReplyCategory {
    pub fn reply(&self) -> &'static str {
        match self {
            ReplyCategory::SocialDesign => SOCIAL_DESIGN_REPLY,
            ReplyCategory::Identity => IDENTITY_REPLY,
            ReplyCategory::Video => VIDEO_REPLY,
            ReplyCategory::Help => HELP_REPLY,
            ReplyCategory::Colors => COLORS_REPLY,
            ReplyCategory::Fallback => FALLBACK_REPLY,
        }
    }
}

/// Case-insensitive substring match against the keyword sets.
pub fn classify(text: &str) -> ReplyCategory {
    let lowered = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(*w)))
        .map(|(category, _)| *category)
        .unwrap_or(ReplyCategory::Fallback)
}

/// Canned reply for `text`. Total: unmatched input gets the generic reply.
pub fn respond(text: &str) -> &'static str {
    classify(text).reply()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Handle for one deferred reply. The caller schedules delivery after `delay_ms`.
/// `generation` names the panel attachment the ticket was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTicket {
    pub id: u64,
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
struct PendingReply {
    id: u64,
    generation: u64,
    prompt: String,
}

/// Transcript plus the replies still owed to it.
/// The transcript outlives the panel; pending replies do not.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: Vec<PendingReply>,
    next_ticket: u64,
    generation: u64,
    reply_delay_ms: u32,
}

impl ChatSession {
    pub fn new(reply_delay_ms: u32) -> Self {
        ChatSession {
            messages: Vec::new(),
            pending: Vec::new(),
            next_ticket: 0,
            generation: 0,
            reply_delay_ms,
        }
    }

    /// Record a user message and issue a ticket for its reply.
    /// Blank input produces nothing.
    pub fn send(&mut self, input: &str) -> Option<ReplyTicket> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(Message {
            role: Role::User,
            content: input.to_string(),
        });

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending.push(PendingReply {
            id,
            generation: self.generation,
            prompt: input.to_string(),
        });
        Some(ReplyTicket {
            id,
            generation: self.generation,
            delay_ms: self.reply_delay_ms,
        })
    }

    /// Deliver the reply owed to `ticket`. Unknown, cancelled, or stale tickets are no-ops.
    pub fn deliver(&mut self, ticket: ReplyTicket) -> Option<&Message> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.id,
                generation = ticket.generation,
                "stale reply ticket ignored"
            );
            return None;
        }
        let index = self
            .pending
            .iter()
            .position(|p| p.id == ticket.id && p.generation == ticket.generation)?;
        let pending = self.pending.remove(index);
        let category = classify(&pending.prompt);
        debug!(ticket = ticket.id, ?category, "assistant reply delivered");

        self.messages.push(Message {
            role: Role::Assistant,
            content: category.reply().to_string(),
        });
        self.messages.last()
    }

    /// Drop one outstanding reply. Returns whether it was still pending.
    pub fn cancel(&mut self, ticket_id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != ticket_id);
        before != self.pending.len()
    }

    /// The panel went away: outstanding tickets become stale, the transcript stays,
    /// and the next `send` runs under a fresh generation.
    pub fn close(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "chat panel closed with pending replies");
        }
        self.pending.clear();
        self.generation += 1;
    }

    /// Typing indicator: shown while any reply is owed.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
