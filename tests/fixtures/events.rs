//! Event list used by the pipeline tests.

struct ChannelCreate;
struct Connect;
struct Disconnect;
struct GuildCreate;
struct MessageCreate;
struct PresenceUpdate;
struct RateLimit;
struct Ready;
struct TypingStart;
