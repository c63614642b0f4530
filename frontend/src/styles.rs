pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 bg-gray-50 dark:bg-gray-900";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200 max-w-2xl mx-auto";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";

// Spin button
pub const SPIN_BUTTON: &str = "relative w-full px-8 py-4 rounded-full font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";

// Result banner
pub const RESULT_BANNER: &str = "flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-orange-400 to-orange-600 border-2 border-orange-300 text-white font-bold text-xl shadow-lg animate-bounce";

// Odds legend
pub const LEGEND_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-3 mt-4";
pub const LEGEND_ITEM: &str = "bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex items-center";
pub const LEGEND_SWATCH: &str = "w-4 h-4 rounded-full mr-3 flex-shrink-0";
