//! Static descriptions of every algorithm and the library search filter.

mod listings;

use crate::algorithms::AlgorithmId;

/// Category name that matches every algorithm
pub const ALL_CATEGORIES: &str = "all";

/// Descriptive metadata shown next to a visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub use_cases: &'static [&'static str],
    pub key_insights: &'static [&'static str],
    pub tags: &'static [&'static str],
    /// Concrete problem the algorithm solves, where one is stated
    pub problem_statement: Option<&'static str>,
    /// Python reference implementation
    pub code: &'static str,
    pub code_explanation: &'static str,
}

impl AlgorithmInfo {
    /// Case-insensitive match of `query` against name, category or any tag
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Metadata for `id`
pub fn entry(id: AlgorithmId) -> &'static AlgorithmInfo {
    &CATALOG[id as usize]
}

/// `"all"` followed by each distinct category in library order
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for info in CATALOG.iter() {
        if !categories.contains(&info.category) {
            categories.push(info.category);
        }
    }
    categories
}

/// Algorithms in `category` (or all of them) whose text matches `query`
pub fn filter(query: &str, category: &str) -> Vec<&'static AlgorithmInfo> {
    CATALOG
        .iter()
        .filter(|info| category == ALL_CATEGORIES || info.category == category)
        .filter(|info| info.matches(query))
        .collect()
}

/// Every algorithm in library order, matching [`AlgorithmId::ALL`]
pub static CATALOG: [AlgorithmInfo; 13] = [
    AlgorithmInfo {
        id: AlgorithmId::BinarySearchTree,
        name: "Binary Search Tree",
        category: "Tree",
        description: "A binary search tree is a binary tree data structure where each node has at most two children, and for each node, all elements in the left subtree are less than the node, and all elements in the right subtree are greater than the node. This property makes searching, insertion, and deletion operations efficient.",
        time_complexity: "Average: O(log n) for search, insert, delete. Worst: O(n) if tree becomes unbalanced.",
        space_complexity: "O(n) for storing n elements",
        use_cases: &[
            "Implementing dynamic sets and lookup tables",
            "Used in many search applications",
            "Database indexing",
            "Priority queues",
        ],
        key_insights: &[
            "BSTs provide O(log n) time complexity for common operations when balanced",
            "The inorder traversal of a BST gives elements in sorted order",
            "Self-balancing variants like AVL and Red-Black trees maintain O(log n) worst-case performance",
            "BSTs can degenerate into linked lists in worst case, resulting in O(n) operations",
        ],
        tags: &[
            "tree",
            "search",
            "binary",
            "recursive",
        ],
        problem_statement: None,
        code: listings::BINARY_SEARCH_TREE,
        code_explanation: "This Python implementation of a Binary Search Tree includes the core operations: insert, find, and remove. The insert method adds a new value while maintaining the BST property. The find method searches for a value by traversing the tree. The remove method handles three cases: removing a leaf node, a node with one child, or a node with two children (using the inorder successor).",
    },
    AlgorithmInfo {
        id: AlgorithmId::GraphDfs,
        name: "Depth-First Search (Graph)",
        category: "Graph",
        description: "Depth-First Search is an algorithm for traversing or searching tree or graph data structures. The algorithm starts at the root node and explores as far as possible along each branch before backtracking. DFS uses a stack (often implemented using recursion) to keep track of nodes to visit next.",
        time_complexity: "O(V + E) where V is the number of vertices and E is the number of edges",
        space_complexity: "O(V) for the recursion stack",
        use_cases: &[
            "Topological sorting",
            "Finding connected components",
            "Solving puzzles with only one solution (e.g., mazes)",
            "Detecting cycles in a graph",
        ],
        key_insights: &[
            "DFS explores deep into a path before backtracking",
            "It can be implemented using recursion or an explicit stack",
            "DFS is not guaranteed to find the shortest path",
            "Pre-order, in-order, and post-order tree traversals are forms of DFS",
        ],
        tags: &[
            "graph",
            "search",
            "traversal",
            "recursive",
            "stack",
        ],
        problem_statement: None,
        code: listings::GRAPH_DFS,
        code_explanation: "This Python implementation provides both recursive and iterative approaches to Depth-First Search. The recursive version uses the call stack to keep track of vertices to visit, while the iterative version uses an explicit stack data structure. Both functions take a graph (represented as an adjacency list) and a starting vertex, then visit all reachable vertices in a depth-first manner, marking each vertex as visited to avoid cycles.",
    },
    AlgorithmInfo {
        id: AlgorithmId::GraphBfs,
        name: "Breadth-First Search (Graph)",
        category: "Graph",
        description: "Breadth-First Search is an algorithm for traversing or searching tree or graph data structures. It starts at the tree root and explores all nodes at the present depth prior to moving on to nodes at the next depth level. BFS uses a queue to keep track of nodes to visit next, ensuring that it visits nodes in order of their distance from the source.",
        time_complexity: "O(V + E) where V is the number of vertices and E is the number of edges",
        space_complexity: "O(V) for the queue",
        use_cases: &[
            "Finding shortest path in an unweighted graph",
            "Web crawlers",
            "Social networking websites (finding people within a certain connection distance)",
            "GPS navigation systems",
        ],
        key_insights: &[
            "BFS explores all neighbors at the current depth before moving to the next level",
            "It guarantees the shortest path in unweighted graphs",
            "BFS requires more memory than DFS due to storing all nodes at a level",
            "Level order traversal in trees is a form of BFS",
        ],
        tags: &[
            "graph",
            "search",
            "traversal",
            "queue",
            "shortest path",
        ],
        problem_statement: None,
        code: listings::GRAPH_BFS,
        code_explanation: "This Python implementation of Breadth-First Search uses a queue to explore vertices level by level. The basic BFS function returns the traversal order, while the shortest_path function extends BFS to find the shortest path between two vertices. Both functions use a visited set to avoid cycles. The queue ensures that vertices are processed in order of their distance from the starting vertex, making BFS ideal for finding shortest paths in unweighted graphs.",
    },
    AlgorithmInfo {
        id: AlgorithmId::BinarySearch,
        name: "Binary Search",
        category: "Searching",
        description: "Binary search is a search algorithm that finds the position of a target value within a sorted array. It compares the target value to the middle element of the array and continues the search on the half that is likely to contain the target. This divide-and-conquer approach allows binary search to achieve logarithmic time complexity.",
        time_complexity: "O(log n)",
        space_complexity: "O(1) for iterative implementation, O(log n) for recursive implementation due to call stack",
        use_cases: &[
            "Finding an element in a sorted array",
            "Dictionary lookup",
            "Finding insertion position in a sorted array",
            "Debugging (e.g., git bisect)",
        ],
        key_insights: &[
            "Binary search requires the array to be sorted",
            "It reduces the search space by half in each step",
            "Binary search is much faster than linear search for large datasets",
            "It can be adapted to find the insertion point for a new element",
        ],
        tags: &[
            "search",
            "divide and conquer",
            "sorted array",
            "logarithmic",
        ],
        problem_statement: None,
        code: listings::BINARY_SEARCH,
        code_explanation: "This Python implementation provides both iterative and recursive approaches to binary search. Both functions take a sorted array and a target value, then repeatedly divide the search space in half until the target is found or determined to be not present. The iterative version uses a while loop with left and right pointers, while the recursive version calls itself with updated search boundaries. Both implementations achieve O(log n) time complexity.",
    },
    AlgorithmInfo {
        id: AlgorithmId::InsertionSort,
        name: "Insertion Sort",
        category: "Sorting",
        description: "Insertion sort is a simple sorting algorithm that builds the final sorted array one item at a time. It iterates through an array, consuming one input element at each repetition, and growing a sorted output list. At each iteration, insertion sort removes one element from the input data, finds the location it belongs within the sorted list, and inserts it there.",
        time_complexity: "O(n²) in worst and average case, O(n) in best case (when array is already sorted)",
        space_complexity: "O(1) as it sorts in-place",
        use_cases: &[
            "Small datasets",
            "Nearly sorted arrays",
            "Online algorithms (can sort as data arrives)",
            "Embedded systems with limited memory",
        ],
        key_insights: &[
            "Insertion sort is efficient for small or nearly sorted datasets",
            "It's an in-place, stable sorting algorithm",
            "It performs better than other quadratic sorts like bubble sort",
            "It's often used as part of more complex algorithms like Timsort",
        ],
        tags: &[
            "sorting",
            "in-place",
            "stable",
            "quadratic",
            "elementary",
        ],
        problem_statement: None,
        code: listings::INSERTION_SORT,
        code_explanation: "This Python implementation of insertion sort builds a sorted array one element at a time. For each element, it finds the correct position in the already sorted portion of the array and shifts larger elements to make room. The main function performs the sort efficiently, while the step-by-step demonstration function shows the algorithm's progress at each iteration. Insertion sort is particularly efficient for small or nearly sorted arrays.",
    },
    AlgorithmInfo {
        id: AlgorithmId::TopologicalSort,
        name: "Topological Sort",
        category: "Graph",
        description: "Topological sorting is an algorithm for ordering the vertices of a directed acyclic graph (DAG) such that for every directed edge (u, v), vertex u comes before vertex v in the ordering. In other words, it creates a linear ordering of vertices based on their dependencies. Topological sorting is only possible if the graph has no directed cycles.",
        time_complexity: "O(V + E) where V is the number of vertices and E is the number of edges",
        space_complexity: "O(V) for storing the visited vertices and the result",
        use_cases: &[
            "Scheduling jobs or tasks with dependencies",
            "Course prerequisites in academic planning",
            "Package dependencies in software installation",
            "Compilation order in build systems",
        ],
        key_insights: &[
            "Topological sort only works on directed acyclic graphs (DAGs)",
            "There can be multiple valid topological orderings for a single graph",
            "It can be implemented using DFS or using Kahn's algorithm (BFS-based)",
            "Detecting a cycle during the algorithm means topological sort is impossible",
        ],
        tags: &[
            "graph",
            "dag",
            "dependencies",
            "scheduling",
            "dfs",
        ],
        problem_statement: None,
        code: listings::TOPOLOGICAL_SORT,
        code_explanation: "This Python implementation provides two approaches to topological sorting. The DFS-based method uses depth-first search to explore the graph, adding vertices to a stack after all their dependencies are processed. Kahn's algorithm uses a breadth-first approach, starting with vertices that have no dependencies and gradually removing edges as vertices are processed. Both methods achieve O(V + E) time complexity and can detect cycles in the graph, which would make topological sorting impossible.",
    },
    AlgorithmInfo {
        id: AlgorithmId::Kadane,
        name: "Kadane's Algorithm",
        category: "Dynamic Programming",
        description: "Kadane's algorithm is a dynamic programming approach used to find the maximum sum subarray in a one-dimensional array of numbers. It efficiently solves the problem by keeping track of the maximum sum ending at each position and the global maximum sum found so far. The algorithm handles arrays containing both positive and negative numbers.",
        time_complexity: "O(n) where n is the length of the array",
        space_complexity: "O(1) as it only requires a constant amount of extra space",
        use_cases: &[
            "Stock market analysis (maximum profit over a period)",
            "Image processing (maximum sum submatrix)",
            "Data mining and pattern recognition",
            "Bioinformatics (finding regions of interest in DNA sequences)",
        ],
        key_insights: &[
            "Kadane's algorithm uses dynamic programming to solve the maximum subarray problem",
            "It makes a single pass through the array, making it very efficient",
            "The key insight is that the maximum subarray ending at position i either includes the maximum subarray ending at position i-1 or starts fresh at position i",
            "It can be extended to find the actual subarray indices, not just the sum",
        ],
        tags: &[
            "dynamic programming",
            "array",
            "maximum subarray",
            "optimization",
        ],
        problem_statement: None,
        code: listings::KADANE,
        code_explanation: "This Python implementation of Kadane's algorithm finds the maximum sum subarray in a one-dimensional array. The basic version returns just the maximum sum, while the extended version also returns the start and end indices of the subarray. The algorithm maintains two variables: max_ending_here (the maximum sum of the subarray ending at the current position) and max_so_far (the global maximum sum found so far). At each step, it decides whether to extend the current subarray or start a new one, achieving O(n) time complexity with O(1) space.",
    },
    AlgorithmInfo {
        id: AlgorithmId::CountingSort,
        name: "Counting Sort",
        category: "Sorting",
        description: "Counting sort is a non-comparative sorting algorithm that works by counting the number of occurrences of each element in the input array and using that information to determine their positions in the output array. It is particularly efficient when the range of input values is not significantly larger than the number of elements to be sorted.",
        time_complexity: "O(n + k) where n is the number of elements and k is the range of input",
        space_complexity: "O(n + k) for the output array and counting array",
        use_cases: &[
            "Sorting integers with a small range",
            "As a subroutine in radix sort",
            "Sorting data with integer keys",
            "Applications where stability is important",
        ],
        key_insights: &[
            "Counting sort is not a comparison-based sort, so it can beat the O(n log n) lower bound",
            "It's stable, preserving the relative order of equal elements",
            "It's efficient when the range of input values (k) is small compared to the number of elements (n)",
            "It requires extra space proportional to the range of input values",
        ],
        tags: &[
            "sorting",
            "non-comparative",
            "linear time",
            "stable",
            "integer",
        ],
        problem_statement: None,
        code: listings::COUNTING_SORT,
        code_explanation: "This Python implementation of counting sort efficiently sorts an array of non-negative integers. The algorithm works in three main steps: first, it counts the occurrences of each element in the input array; second, it calculates the cumulative counts to determine the position of each element in the output array; finally, it builds the sorted output array by placing each element in its correct position. By processing the input array in reverse during the final step, the algorithm maintains stability. Counting sort achieves O(n + k) time complexity, making it very efficient when the range of input values (k) is small.",
    },
    AlgorithmInfo {
        id: AlgorithmId::MinHeap,
        name: "Min Heap",
        category: "Heap",
        description: "A min heap is a complete binary tree where the value of each node is less than or equal to the values of its children. This property ensures that the minimum element is always at the root. Min heaps are commonly used to implement priority queues where the element with the highest priority (lowest value) is always at the front.",
        time_complexity: "O(1) for find-min, O(log n) for insert and extract-min operations",
        space_complexity: "O(n) for storing n elements",
        use_cases: &[
            "Priority queues with minimum priority first",
            "Dijkstra's shortest path algorithm",
            "Heap sort",
            "Finding the k smallest elements",
        ],
        key_insights: &[
            "Min heaps maintain the heap property: each parent node is less than or equal to its children",
            "They are typically implemented as arrays, where for a node at index i, its children are at indices 2i+1 and 2i+2",
            "The root (minimum element) is always at index 0",
            "Heapify operations maintain the heap property after insertions and deletions",
        ],
        tags: &[
            "heap",
            "priority queue",
            "binary tree",
            "data structure",
            "complete tree",
        ],
        problem_statement: None,
        code: listings::MIN_HEAP,
        code_explanation: "This Python implementation of a min heap provides all the essential operations: insertion, extraction of the minimum element, decreasing a key's value, and deletion. The heap is represented as an array where for a node at index i, its parent is at index (i-1)//2, and its children are at indices 2*i+1 and 2*i+2. The insert operation adds an element at the end and bubbles it up to maintain the heap property. The extract_min operation removes and returns the minimum element (at the root), replaces it with the last element, and then heapifies down to restore the heap property. All operations maintain the min heap invariant that each parent is less than or equal to its children.",
    },
    AlgorithmInfo {
        id: AlgorithmId::MaxHeap,
        name: "Max Heap",
        category: "Heap",
        description: "A max heap is a complete binary tree where the value of each node is greater than or equal to the values of its children. This property ensures that the maximum element is always at the root. Max heaps are commonly used to implement priority queues where the element with the highest priority (highest value) is always at the front.",
        time_complexity: "O(1) for find-max, O(log n) for insert and extract-max operations",
        space_complexity: "O(n) for storing n elements",
        use_cases: &[
            "Priority queues with maximum priority first",
            "Heap sort",
            "Finding the k largest elements",
            "Job scheduling based on priority",
        ],
        key_insights: &[
            "Max heaps maintain the heap property: each parent node is greater than or equal to its children",
            "They are typically implemented as arrays, where for a node at index i, its children are at indices 2i+1 and 2i+2",
            "The root (maximum element) is always at index 0",
            "Heapify operations maintain the heap property after insertions and deletions",
        ],
        tags: &[
            "heap",
            "priority queue",
            "binary tree",
            "data structure",
            "complete tree",
        ],
        problem_statement: None,
        code: listings::MAX_HEAP,
        code_explanation: "This Python implementation of a max heap provides all the essential operations: insertion, extraction of the maximum element, increasing a key's value, and deletion. The heap is represented as an array where for a node at index i, its parent is at index (i-1)//2, and its children are at indices 2*i+1 and 2*i+2. The insert operation adds an element at the end and bubbles it up to maintain the heap property. The extract_max operation removes and returns the maximum element (at the root), replaces it with the last element, and then heapifies down to restore the heap property. All operations maintain the max heap invariant that each parent is greater than or equal to its children.",
    },
    AlgorithmInfo {
        id: AlgorithmId::DutchNationalFlag,
        name: "Dutch National Flag Algorithm",
        category: "Sorting",
        description: "The Dutch National Flag algorithm is a linear time partition algorithm that sorts an array containing three distinct values. It was designed by Edsger W. Dijkstra and named after the Dutch national flag, which has three colors. The algorithm efficiently sorts an array of 0s, 1s, and 2s in a single pass, which is particularly useful for problems like the 'Sort Colors' problem.",
        time_complexity: "O(n) where n is the number of elements in the array",
        space_complexity: "O(1) as it sorts in-place",
        use_cases: &[
            "Sorting arrays with a small fixed number of distinct values",
            "Partitioning arrays around a pivot value (as in quicksort)",
            "Segregating binary arrays (0s and 1s)",
            "Solving the 'Sort Colors' problem (red, white, blue)",
        ],
        key_insights: &[
            "The algorithm uses three pointers to divide the array into four sections",
            "It processes the array in a single pass, making it very efficient",
            "It's an in-place algorithm, requiring no extra space",
            "It can be generalized to handle more than three distinct values",
        ],
        tags: &[
            "sorting",
            "in-place",
            "linear time",
            "partitioning",
            "three-way",
        ],
        problem_statement: Some("Given an array containing only 0s, 1s, and 2s (representing red, white, and blue), sort the array in-place so that the same numbers are grouped together."),
        code: listings::DUTCH_NATIONAL_FLAG,
        code_explanation: "This Python implementation of the Dutch National Flag algorithm efficiently sorts an array containing only 0s, 1s, and 2s in a single pass. The algorithm uses three pointers: 'low' for tracking the boundary of 0s, 'mid' for the current element being processed, and 'high' for tracking the boundary of 2s. As the algorithm processes each element, it maintains three sections: elements less than the pivot (0s), elements equal to the pivot (1s), and elements greater than the pivot (2s). When it encounters a 0, it swaps it with the element at the 'low' pointer and increments both 'low' and 'mid'. When it encounters a 1, it simply increments 'mid'. When it encounters a 2, it swaps it with the element at the 'high' pointer and decrements 'high'. The algorithm continues until 'mid' exceeds 'high', at which point the array is fully sorted.",
    },
    AlgorithmInfo {
        id: AlgorithmId::BitManipulation,
        name: "Bit Manipulation",
        category: "Bit Operations",
        description: "Bit manipulation involves applying various operations on individual bits of binary numbers. These operations include bitwise AND, OR, XOR, NOT, as well as bit shifts. Bit manipulation techniques are used to optimize algorithms, perform fast arithmetic operations, and solve problems that involve binary representations.",
        time_complexity: "O(1) for most bit operations as they operate directly on bits",
        space_complexity: "O(1) as bit operations typically don't require additional space",
        use_cases: &[
            "Optimizing algorithms for performance",
            "Implementing low-level system operations",
            "Encoding and decoding data",
            "Solving problems like finding unique numbers or counting bits",
        ],
        key_insights: &[
            "Bit manipulation can significantly improve algorithm efficiency",
            "Common operations include AND (&), OR (|), XOR (^), NOT (~), left shift (<<), and right shift (>>)",
            "XOR is particularly useful for finding unique elements or toggling bits",
            "Bit manipulation is widely used in cryptography, compression, and hardware programming",
        ],
        tags: &[
            "bit manipulation",
            "binary",
            "optimization",
            "bitwise operations",
            "algorithms",
        ],
        problem_statement: Some("Perform various bit-level operations on integers to solve problems efficiently, such as counting set bits, checking if a number is a power of two, and manipulating individual bits."),
        code: listings::BIT_MANIPULATION,
        code_explanation: "This Python implementation demonstrates various bit manipulation techniques. The `count_set_bits` function counts the number of 1s in a binary number by checking each bit. The `is_power_of_two` function uses the property that powers of 2 have only one bit set. The `get_bit`, `set_bit`, `clear_bit`, and `toggle_bit` functions manipulate individual bits at specific positions. The `find_single_number` function uses XOR to find a unique element in an array where all other elements appear twice (XOR of a number with itself is 0). The `swap_without_temp` function swaps two numbers without using a temporary variable by using XOR operations. These bit manipulation techniques are efficient and can be used to optimize various algorithms.",
    },
    AlgorithmInfo {
        id: AlgorithmId::Greedy,
        name: "Greedy Algorithm",
        category: "Algorithm Paradigm",
        description: "A greedy algorithm is an algorithmic paradigm that follows the problem-solving heuristic of making the locally optimal choice at each stage with the hope of finding a global optimum. In many problems, a greedy strategy does not usually produce an optimal solution, but for some problems, such as the fractional knapsack problem, it does.",
        time_complexity: "Varies depending on the specific problem",
        space_complexity: "Varies depending on the specific problem",
        use_cases: &[
            "Minimum spanning tree algorithms (Kruskal's, Prim's)",
            "Huffman coding for data compression",
            "Activity selection problems",
            "Coin change problems with certain denominations",
        ],
        key_insights: &[
            "Greedy algorithms make locally optimal choices at each step",
            "They are usually easier to implement and more efficient than dynamic programming",
            "They don't always yield globally optimal solutions",
            "The key is to prove that a greedy choice at each step leads to a global optimum",
        ],
        tags: &[
            "greedy",
            "optimization",
            "algorithm paradigm",
            "activity selection",
            "knapsack",
        ],
        problem_statement: Some("Given a set of activities with start and finish times, select the maximum number of activities that can be performed by a single person, assuming that a person can only work on a single activity at a time."),
        code: listings::GREEDY,
        code_explanation: "This Python implementation demonstrates three classic greedy algorithms. The `activity_selection` function solves the problem of selecting the maximum number of non-overlapping activities by sorting activities by finish time and greedily selecting activities that start after the previous activity finishes. The `fractional_knapsack` function solves the problem of maximizing value in a knapsack by sorting items by their value-to-weight ratio and greedily selecting items until the knapsack is full. The `coin_change_greedy` function finds the minimum number of coins needed to make a given amount by greedily selecting the largest denomination coins first. Note that the greedy approach for coin change works only for certain coin systems (like US coins) where each denomination is a multiple of the smaller ones. These examples illustrate how greedy algorithms make locally optimal choices at each step to find a solution.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for (info, id) in CATALOG.iter().zip(AlgorithmId::ALL) {
            assert_eq!(info.id, id);
            assert_eq!(entry(id).id, id);
        }
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            categories(),
            vec![
                "all",
                "Tree",
                "Graph",
                "Searching",
                "Sorting",
                "Dynamic Programming",
                "Heap",
                "Bit Operations",
                "Algorithm Paradigm",
            ]
        );
    }

    #[test]
    fn test_filter_by_query_and_category() {
        let heaps: Vec<AlgorithmId> = filter("priority", ALL_CATEGORIES)
            .iter()
            .map(|info| info.id)
            .collect();
        assert_eq!(heaps, vec![AlgorithmId::MinHeap, AlgorithmId::MaxHeap]);

        let graph_search = filter("SEARCH", "Graph");
        assert_eq!(graph_search.len(), 2);

        assert_eq!(filter("", ALL_CATEGORIES).len(), CATALOG.len());
        assert!(filter("quantum", ALL_CATEGORIES).is_empty());
        assert!(filter("", "No Such Category").is_empty());
    }

    #[test]
    fn test_every_entry_has_reference_code() {
        for info in CATALOG.iter() {
            assert!(info.code.lines().count() > 5, "{} has no listing", info.id);
            assert!(info.code.contains("def "), "{} listing is not Python", info.id);
            assert!(!info.code_explanation.is_empty());
        }
    }

    #[test]
    fn test_problem_statements() {
        let stated: Vec<AlgorithmId> = CATALOG
            .iter()
            .filter(|info| info.problem_statement.is_some())
            .map(|info| info.id)
            .collect();
        assert_eq!(
            stated,
            vec![
                AlgorithmId::DutchNationalFlag,
                AlgorithmId::BitManipulation,
                AlgorithmId::Greedy,
            ]
        );
    }
}
